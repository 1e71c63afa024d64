//! Shared application-wide constants.
//! Centralizes tweakable defaults used by the particle background, reveal
//! transitions and page layout.

// Particle population
/// Upper bound on the number of particles, keeps the pairwise link scan cheap.
pub const PARTICLE_CAP: usize = 50;
/// Canvas area (in square points) per particle.
pub const PARTICLE_DENSITY: f32 = 20_000.0;
/// Smallest canvas area per particle accepted from saved settings
pub const PARTICLE_DENSITY_MIN: f32 = 1_000.0;
/// Smallest particle radius.
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
/// Largest particle radius (exclusive).
pub const PARTICLE_RADIUS_MAX: f32 = 4.0;
/// Largest absolute velocity component, in points per frame.
pub const PARTICLE_MAX_SPEED: f32 = 0.25;
/// Particle alpha range lower bound.
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
/// Particle alpha range upper bound (exclusive).
pub const PARTICLE_ALPHA_MAX: f32 = 0.7;
/// Base particle hue (royal blue).
pub const PARTICLE_RGB: (u8, u8, u8) = (65, 105, 225);

// Links
/// Maximum distance at which two particles are connected by a line.
pub const LINK_THRESHOLD: f32 = 100.0;
/// Opacity of a link between two coincident particles.
pub const LINK_BASE_OPACITY: f32 = 0.2;
/// Link stroke width in points.
pub const LINK_WIDTH: f32 = 0.5;

// Reveal transitions
/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Default reveal duration in seconds.
pub const REVEAL_DURATION: f32 = 0.5;
/// Default stagger step between siblings, in seconds.
pub const REVEAL_STAGGER: f32 = 0.1;
/// Default slide distance of a reveal, in points.
pub const REVEAL_OFFSET: f32 = 20.0;

// Contact form
/// Seconds a submission spends in the simulated sending state.
pub const CONTACT_SUBMIT_SECS: f64 = 1.5;
/// Seconds the success notice stays visible after sending.
pub const CONTACT_SENT_SECS: f64 = 5.0;

// Typewriter
/// Seconds per typed or erased character.
pub const TYPE_CHAR_SECS: f64 = 0.05;
/// Seconds a fully typed role is held before erasing.
pub const TYPE_HOLD_SECS: f64 = 2.0;

// Skill cloud
/// Height of the skill cloud area.
pub const SKILL_CLOUD_HEIGHT: f32 = 400.0;
/// Ring rotation in radians per second, one turn every 30 seconds.
pub const SKILL_CLOUD_SPIN_SPEED: f32 = std::f32::consts::TAU / 30.0;
/// Bob frequency in radians per second.
pub const SKILL_CLOUD_BOB_SPEED: f32 = 1.2;
/// Bob height in points.
pub const SKILL_CLOUD_BOB_AMPLITUDE: f32 = 6.0;
/// Label colour of the skill cloud.
pub const SKILL_CLOUD_RGB: (u8, u8, u8) = (211, 47, 47);

// Toast
/// Seconds the "message sent" toast stays on screen.
pub const TOAST_SECS: f64 = 4.0;

// Layout
/// Maximum width of the centred content column.
pub const CONTENT_MAX_WIDTH: f32 = 960.0;
/// Vertical gap between page sections.
pub const SECTION_SPACING: f32 = 96.0;
