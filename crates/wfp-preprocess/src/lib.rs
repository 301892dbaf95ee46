pub mod flatten;
pub mod loader;
pub mod normalize;
pub mod preprocess;

pub use flatten::{flatten_node, BreadCrumbs, ProcessedCache};
pub use loader::{index_nodes, DocumentLoader, NodeMap};
pub use normalize::{Normalizer, YamlNormalizer};
pub use preprocess::PreProcessor;
