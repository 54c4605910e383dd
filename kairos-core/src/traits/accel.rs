//! Accelerometer abstraction.

/// One raw acceleration sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Accelerometer access failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelError;

/// Which way the watch is being held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    FaceUp,
    FaceDown,
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    /// Between positions, no dominant axis
    Unknown,
}

impl Orientation {
    pub fn label(self) -> &'static str {
        match self {
            Orientation::FaceUp => "FACE UP",
            Orientation::FaceDown => "FACE DOWN",
            Orientation::TopEdge => "TOP EDGE",
            Orientation::BottomEdge => "BOTTOM EDGE",
            Orientation::LeftEdge => "LEFT EDGE",
            Orientation::RightEdge => "RIGHT EDGE",
            Orientation::Unknown => "ERROR!!!",
        }
    }
}

/// The motion sensor
pub trait Accelerometer {
    /// One-time sensor setup on cold boot
    fn configure(&mut self) -> Result<(), AccelError>;

    /// Read one raw sample
    fn accel(&mut self) -> Result<AccelSample, AccelError>;

    /// Current device orientation
    fn orientation(&mut self) -> Result<Orientation, AccelError>;
}
