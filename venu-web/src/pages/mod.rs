mod floating_gradient;

pub use floating_gradient::VenuJamsFloatingGradient;
