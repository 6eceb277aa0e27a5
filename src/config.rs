use crate::constants::extract::DEFAULT_MAX_DEPTH;

/// Controls how leaf-path extraction walks a document.
#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    /// Max nesting depth (path segments) before extraction fails closed.
    ///
    /// Documents are untrusted input, so traversal is bounded rather than
    /// allowed to exhaust the stack on adversarial nesting.
    pub max_depth: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
