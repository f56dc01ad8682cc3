//! Static catalog backing the listing pages: property records, agent
//! profiles, testimonials, and the "how it works" copy. Everything here is
//! immutable sample data; nothing is persisted or mutated at runtime.

mod domain;
mod samples;

pub use domain::{
    AgentProfile, BadgeColor, BadgeIcon, BadgeStyle, HowItWorksStep, PropertyCardView,
    PropertyCategory, PropertyId, PropertyRecord, StepIcon, Testimonial,
};
pub use samples::{
    featured_agents, featured_properties, how_it_works_steps, listed_properties, testimonials,
};
