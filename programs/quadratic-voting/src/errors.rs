use anchor_lang::error_code;

#[error_code]
pub enum QuadraticVotingError {
    #[msg("String too long.")]
    StringTooLong,
    #[msg("Invalid vote type.")]
    InvalidVoteType,
    #[msg("Only the DAO authority can create proposals.")]
    UnauthorizedProposalCreation,
    #[msg("Invalid DAO.")]
    InvalidDao,
    #[msg("Overflow detected.")]
    Overflow,
}
