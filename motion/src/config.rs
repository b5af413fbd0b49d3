//! Build-time mechanical parameters of the mouse drivetrain.

macro_rules! parameters {
    (
        $(
            $key:ident : $type:ty = $value:expr
        ),+ $(,)?
    ) => {
        $(
            pub const $key: $type = $value;
        )+
    };
}

parameters! {
    // Drive wheel diameter [mm]. Re-measure after changing tires.
    TIRE_DIAMETER_MM: f32 = 24.0,
    // Motor full steps per revolution (1.8 deg stepper).
    FULL_STEPS_PER_REV: f32 = 200.0,
}
