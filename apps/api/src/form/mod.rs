// Form collection: immutable state + reducer, tier gating, validation, and
// attachment encoding. Nothing here touches the network.

// The collector and attachment encoder are the client-side library surface;
// no HTTP route drives them, so the binary never calls them.
#[allow(dead_code)]
pub mod attachments;
#[allow(dead_code)]
pub mod collector;
pub mod gating;
pub mod handlers;
pub mod validation;
