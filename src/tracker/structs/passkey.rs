/// Passkey taken from the request route.
///
/// Construct it with [`Passkey::new`], which rejects an empty segment.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Passkey(pub(crate) String);
