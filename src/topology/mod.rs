pub mod attachment;
pub mod rewiring;

pub use attachment::{Attachment, attach_newcomer, preferential_select};
pub use rewiring::{Rewiring, rewire_random_node};
