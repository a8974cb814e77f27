pub mod school;
pub mod tenant;
pub mod theme;

pub use school::{
    Address, Branding, Coordinates, EmailAddresses, OpeningHours, PhoneNumbers, SchoolConfig,
    SchoolKind, TuitionRate, TuitionTable, Weekday,
};
pub use tenant::{TenantKey, TenantProfile, TenantSummary};
pub use theme::{
    ColorTokens, DesignTokens, FontFamily, FontSize, FontWeight, RadiusStep, RampStep,
    SemanticColor, ShadowStep, SpaceStep, Typography,
};
