//! Search core: text matching, facet filtering, ranking, and the pipeline
//! that recomputes the visible result set from those three stages.

mod facet;
mod matcher;
mod pipeline;
mod query;
mod rank;

pub use facet::{apply_facets, facets_allow};
pub use matcher::record_matches;
pub use pipeline::{
    apply_facets_and_sort_preserve_selection, apply_search_results, move_selection,
};
pub use query::send_query;
pub use rank::sort_records;
