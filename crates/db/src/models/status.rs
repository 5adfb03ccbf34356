//! Need lifecycle status mapping to the `need_statuses` lookup table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Need lifecycle status.
///
/// Discriminants match the seed data order (1-based) in `need_statuses`.
/// Transitions are not enforced at this layer.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedStatus {
    Active = 1,
    Inactive = 2,
}

impl NeedStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }
}

impl From<NeedStatus> for StatusId {
    fn from(value: NeedStatus) -> Self {
        value as StatusId
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn need_status_ids_match_seed_data() {
        assert_eq!(NeedStatus::Active.id(), 1);
        assert_eq!(NeedStatus::Inactive.id(), 2);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = NeedStatus::Inactive.into();
        assert_eq!(id, 2);
    }
}
