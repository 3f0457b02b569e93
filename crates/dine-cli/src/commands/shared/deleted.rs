use serde::Serialize;

/// Response for delete commands. Deleting an unknown id also succeeds.
#[derive(Debug, Serialize)]
pub struct DeletedResponse<'a> {
    pub id: &'a str,
    pub deleted: bool,
}

impl<'a> DeletedResponse<'a> {
    pub const fn new(id: &'a str) -> Self {
        Self { id, deleted: true }
    }
}
