/// Longest DAO display name accepted by `init_dao`.
pub const MAX_DAO_NAME_LEN: usize = 64;

/// Longest proposal metadata string accepted by `init_proposal`.
pub const MAX_PROPOSAL_METADATA_LEN: usize = 256;
