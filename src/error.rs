/// Errors raised while building a ring from a membership snapshot.
///
/// Queries on a built ring never fail: unknown nodes and empty rings yield
/// empty results instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// Every node id needs exactly one token list.
    #[error("Membership lists {nodes} node ids but {token_lists} token lists")]
    MismatchedMembership { nodes: usize, token_lists: usize },

    /// No node contributed a single token.
    #[error("Membership holds no vnodes")]
    EmptyMembership,
}

pub type RingResult<T> = Result<T, RingError>;
