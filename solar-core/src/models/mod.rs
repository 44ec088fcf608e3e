mod location_profile;
mod roof_direction;

pub use location_profile::{LocationProfile, NewLocationProfile};
pub use roof_direction::{RoofDirectionCode, RoofDirectionProfile};
