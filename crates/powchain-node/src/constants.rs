pub(crate) const DEFAULT_BLOCKS: [&str; 2] = ["First Block", "Second Block"];
pub(crate) const DIFFICULTY_ENV: &str = "POWCHAIN_DIFFICULTY";
pub(crate) const PARALLEL_ENV: &str = "POWCHAIN_PARALLEL";
