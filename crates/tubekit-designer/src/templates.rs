//! Shape template catalog.
//!
//! Parameterized generators for the bent shapes a workshop makes over and
//! over. Each template produces a ready-to-insert bend list; feasibility
//! against a concrete tube and material is still the validator's call at
//! insertion time.

use tracing::debug;

use tubekit_bending::{BendSequence, SequenceError};
use tubekit_core::BendSpec;

use crate::error::DesignerError;

/// A parameterized bend-sequence generator.
pub trait BendTemplate {
    /// Stable identifier used for lookup.
    fn id(&self) -> &'static str;
    /// Display name.
    fn name(&self) -> &'static str;
    /// One-line description of the produced shape.
    fn description(&self) -> &'static str;
    /// Generates the bends for the current parameters.
    fn generate(&self) -> Vec<BendSpec>;

    /// Builds a fresh sequence from the generated bends.
    fn to_sequence(&self) -> Result<BendSequence, SequenceError> {
        BendSequence::from_bends(self.generate())
    }
}

/// A single bend at an arbitrary angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elbow {
    /// Distance from the tube start to the bend, in mm.
    pub position: f64,
    /// Signed bend angle in degrees.
    pub angle: f64,
    /// Bend radius in mm.
    pub radius: f64,
}

impl Default for Elbow {
    fn default() -> Self {
        Self {
            position: 200.0,
            angle: 90.0,
            radius: 50.0,
        }
    }
}

impl BendTemplate for Elbow {
    fn id(&self) -> &'static str {
        "elbow"
    }
    fn name(&self) -> &'static str {
        "Simple elbow"
    }
    fn description(&self) -> &'static str {
        "A single bend to create an elbow"
    }
    fn generate(&self) -> Vec<BendSpec> {
        vec![BendSpec::new(self.angle, self.radius, self.position)]
    }
}

/// A single 90° bend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightAngle {
    pub position: f64,
    pub radius: f64,
}

impl Default for RightAngle {
    fn default() -> Self {
        Self {
            position: 200.0,
            radius: 50.0,
        }
    }
}

impl BendTemplate for RightAngle {
    fn id(&self) -> &'static str {
        "right_angle"
    }
    fn name(&self) -> &'static str {
        "Right angle"
    }
    fn description(&self) -> &'static str {
        "A 90° bend to create a right angle"
    }
    fn generate(&self) -> Vec<BendSpec> {
        vec![BendSpec::new(90.0, self.radius, self.position)]
    }
}

/// Two same-direction 90° bends forming a U.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UShape {
    /// Length of the first leg, in mm.
    pub leg_length: f64,
    /// Distance between the two legs, in mm.
    pub spacing: f64,
    /// Bend radius in mm.
    pub radius: f64,
}

impl Default for UShape {
    fn default() -> Self {
        Self {
            leg_length: 200.0,
            spacing: 100.0,
            radius: 50.0,
        }
    }
}

impl BendTemplate for UShape {
    fn id(&self) -> &'static str {
        "u"
    }
    fn name(&self) -> &'static str {
        "U shape"
    }
    fn description(&self) -> &'static str {
        "Two 90° bends to create a U shape"
    }
    fn generate(&self) -> Vec<BendSpec> {
        vec![
            BendSpec::new(90.0, self.radius, self.leg_length),
            BendSpec::new(90.0, self.radius, self.leg_length + self.spacing),
        ]
    }
}

/// Two opposing 90° bends forming a Z offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZShape {
    pub leg_length: f64,
    pub spacing: f64,
    pub radius: f64,
}

impl Default for ZShape {
    fn default() -> Self {
        Self {
            leg_length: 200.0,
            spacing: 100.0,
            radius: 50.0,
        }
    }
}

impl BendTemplate for ZShape {
    fn id(&self) -> &'static str {
        "z"
    }
    fn name(&self) -> &'static str {
        "Z shape"
    }
    fn description(&self) -> &'static str {
        "Two opposing 90° bends to create a Z shape"
    }
    fn generate(&self) -> Vec<BendSpec> {
        vec![
            BendSpec::new(90.0, self.radius, self.leg_length),
            BendSpec::new(-90.0, self.radius, self.leg_length + self.spacing),
        ]
    }
}

/// Three alternating bends forming an S sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SShape {
    /// Straight length between bends, in mm.
    pub segment_length: f64,
    /// Magnitude of the outer bends, in degrees; the middle bend doubles
    /// it in the opposite direction.
    pub angle: f64,
    pub radius: f64,
}

impl Default for SShape {
    fn default() -> Self {
        Self {
            segment_length: 150.0,
            angle: 60.0,
            radius: 50.0,
        }
    }
}

impl BendTemplate for SShape {
    fn id(&self) -> &'static str {
        "s"
    }
    fn name(&self) -> &'static str {
        "S shape"
    }
    fn description(&self) -> &'static str {
        "Three alternating bends to create an S shape"
    }
    fn generate(&self) -> Vec<BendSpec> {
        vec![
            BendSpec::new(self.angle, self.radius, self.segment_length),
            BendSpec::new(-self.angle * 2.0, self.radius, self.segment_length * 2.0),
            BendSpec::new(self.angle, self.radius, self.segment_length * 3.0),
        ]
    }
}

/// Alternating 90° bends climbing like a staircase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Staircase {
    /// Height of each step, in mm.
    pub rise: f64,
    /// Depth of each step, in mm.
    pub run: f64,
    /// Number of steps.
    pub steps: usize,
    pub radius: f64,
}

impl Default for Staircase {
    fn default() -> Self {
        Self {
            rise: 100.0,
            run: 80.0,
            steps: 3,
            radius: 40.0,
        }
    }
}

impl BendTemplate for Staircase {
    fn id(&self) -> &'static str {
        "staircase"
    }
    fn name(&self) -> &'static str {
        "Staircase"
    }
    fn description(&self) -> &'static str {
        "Alternating 90° bends to create a staircase profile"
    }
    fn generate(&self) -> Vec<BendSpec> {
        let mut bends = Vec::with_capacity(self.steps * 2);
        for step in 0..self.steps {
            let base = (self.rise + self.run) * step as f64;
            bends.push(BendSpec::new(90.0, self.radius, base + self.rise));
            bends.push(BendSpec::new(-90.0, self.radius, base + self.rise + self.run));
        }
        bends
    }
}

/// Three shallow same-direction bends forming a progressive curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GentleCurve {
    /// Position of the first bend, in mm.
    pub start: f64,
    /// Angle of each bend, in degrees.
    pub step_angle: f64,
    /// Spacing between the bends, in mm.
    pub spacing: f64,
    pub radius: f64,
}

impl Default for GentleCurve {
    fn default() -> Self {
        Self {
            start: 150.0,
            step_angle: 20.0,
            spacing: 80.0,
            radius: 80.0,
        }
    }
}

impl BendTemplate for GentleCurve {
    fn id(&self) -> &'static str {
        "gentle_curve"
    }
    fn name(&self) -> &'static str {
        "Gentle curve"
    }
    fn description(&self) -> &'static str {
        "Three shallow bends to create a progressive curve"
    }
    fn generate(&self) -> Vec<BendSpec> {
        (0..3)
            .map(|i| {
                BendSpec::new(
                    self.step_angle,
                    self.radius,
                    self.start + self.spacing * i as f64,
                )
            })
            .collect()
    }
}

/// Four 90° bends closing a rectangular loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedLoop {
    /// First pair of opposite sides, in mm.
    pub side_a: f64,
    /// Second pair of opposite sides, in mm.
    pub side_b: f64,
    pub radius: f64,
}

impl Default for ClosedLoop {
    fn default() -> Self {
        Self {
            side_a: 150.0,
            side_b: 100.0,
            radius: 40.0,
        }
    }
}

impl BendTemplate for ClosedLoop {
    fn id(&self) -> &'static str {
        "closed_loop"
    }
    fn name(&self) -> &'static str {
        "Closed loop"
    }
    fn description(&self) -> &'static str {
        "Four 90° bends to close a rectangular loop"
    }
    fn generate(&self) -> Vec<BendSpec> {
        vec![
            BendSpec::new(90.0, self.radius, self.side_a),
            BendSpec::new(90.0, self.radius, self.side_a + self.side_b),
            BendSpec::new(90.0, self.radius, self.side_a * 2.0 + self.side_b),
            BendSpec::new(90.0, self.radius, (self.side_a + self.side_b) * 2.0),
        ]
    }
}

/// Registry of the built-in templates.
pub struct TemplateLibrary {
    templates: Vec<Box<dyn BendTemplate>>,
}

impl TemplateLibrary {
    /// The built-in template set with default parameters.
    pub fn standard() -> Self {
        let templates: Vec<Box<dyn BendTemplate>> = vec![
            Box::new(Elbow::default()),
            Box::new(RightAngle::default()),
            Box::new(UShape::default()),
            Box::new(ZShape::default()),
            Box::new(SShape::default()),
            Box::new(Staircase::default()),
            Box::new(GentleCurve::default()),
            Box::new(ClosedLoop::default()),
        ];
        debug!(count = templates.len(), "initialized template library");
        Self { templates }
    }

    /// Looks up a template by id.
    pub fn get(&self, id: &str) -> Option<&dyn BendTemplate> {
        self.templates
            .iter()
            .find(|t| t.id() == id)
            .map(|t| t.as_ref())
    }

    /// All registered templates.
    pub fn all(&self) -> impl Iterator<Item = &dyn BendTemplate> {
        self.templates.iter().map(|t| t.as_ref())
    }

    /// Generates the bends of the template registered under `id`.
    pub fn apply(&self, id: &str) -> Result<Vec<BendSpec>, DesignerError> {
        self.get(id)
            .map(|t| t.generate())
            .ok_or_else(|| DesignerError::UnknownTemplate(id.to_string()))
    }

    /// Builds a ready-to-use sequence from the template registered under
    /// `id`.
    pub fn sequence_for(&self, id: &str) -> Result<BendSequence, DesignerError> {
        let template = self
            .get(id)
            .ok_or_else(|| DesignerError::UnknownTemplate(id.to_string()))?;
        Ok(template.to_sequence()?)
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::standard()
    }
}
