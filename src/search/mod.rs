//! Search Analytics Module
//!
//! Text processing and document similarity on top of the facet model.
//!
//! ## Responsibilities
//! - **Word extraction**: Splitting raw text into words the language's morphology accepts.
//! - **Similarity**: Cosine similarity between facet vectors.
//! - **Ranking**: Ordering candidate documents by similarity to a query document.
//! - **API**: HTTP handlers for the node's analytics endpoints.
//!
//! ## Submodules
//! - **`tokenizer`**: `WordExtractor`.
//! - **`similarity`**: Scalar composition, vector module and cosine similarity.
//! - **`engine`**: Similarity ranking.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod similarity;
pub mod tokenizer;
pub mod types;
