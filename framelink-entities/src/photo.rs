use crate::{id::*, time::*, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id              : Id,
    pub photographer_id : Id,
    pub url             : Url,
    pub caption         : String,
    pub approved        : bool,
    pub likes           : u64,
    pub created_at      : Timestamp,
}

impl Photo {
    /// Pending photos are waiting in the moderation queue.
    pub const fn is_pending(&self) -> bool {
        !self.approved
    }
}
