#[derive(Debug, Default, Clone, Copy)]
pub struct NoPersistence;
