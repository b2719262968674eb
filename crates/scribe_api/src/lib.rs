//! HTTP surface for Scribe.
//!
//! The router validates input, delegates to a [`BlogWriter`](scribe_interface::BlogWriter)
//! and a [`GenerationStore`](scribe_interface::GenerationStore), and renders
//! every failure as `{"detail": "..."}`:
//!
//! | Failure                     | Status |
//! |-----------------------------|--------|
//! | body or query validation    | 422    |
//! | unknown generation id       | 404    |
//! | inference or database error | 500    |

mod dto;
mod error;
mod handlers;
mod router;
mod state;

pub use dto::{
    DEFAULT_HISTORY_LIMIT, HistoryQuery, HistoryResponse, MessageResponse, ModelsResponse,
    StatusResponse,
};
pub use error::{ApiError, ApiResult};
pub use router::{cors_layer, create_app, create_router};
pub use state::AppState;
