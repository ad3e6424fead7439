pub mod cast_vote;
pub mod init_dao;
pub mod init_proposal;

pub use cast_vote::*;
pub use init_dao::*;
pub use init_proposal::*;
