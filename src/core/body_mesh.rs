//! Procedural body preview for the try-on page.
//!
//! [`build_body`] turns measurements into a small set of solid primitives in
//! metres (y up, feet on `y = 0`, body facing `+z`). [`BodyModel::project`]
//! rotates that model about the vertical axis and flattens it into 2D shapes
//! that a canvas can fill back to front.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Rotation applied per animation frame, in radians
pub const SPIN_PER_FRAME: f64 = 0.004;

pub const DEFAULT_SKIN_TONE: &str = "#E5BCA8";
pub const DEFAULT_GARMENT_COLOR: &str = "#E91E63";
pub const SHOE_COLOR: &str = "#D4A574";

/// Body measurements in centimetres (weight in kilograms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub height: f64,
    pub weight: f64,
    pub shoulder_width: f64,
    pub chest: f64,
    pub waist: f64,
    pub hip: f64,
    pub arm_length: f64,
    pub inseam: f64,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            height: 170.0,
            weight: 65.0,
            shoulder_width: 42.0,
            chest: 98.0,
            waist: 75.0,
            hip: 100.0,
            arm_length: 65.0,
            inseam: 80.0,
        }
    }
}

impl Measurements {
    /// Clamp every value into a range the geometry can represent
    pub fn clamped(&self) -> Self {
        Self {
            height: self.height.clamp(100.0, 230.0),
            weight: self.weight.clamp(25.0, 250.0),
            shoulder_width: self.shoulder_width.clamp(25.0, 70.0),
            chest: self.chest.clamp(50.0, 180.0),
            waist: self.waist.clamp(40.0, 180.0),
            hip: self.hip.clamp(50.0, 180.0),
            arm_length: self.arm_length.clamp(35.0, 100.0),
            inseam: self.inseam.clamp(40.0, 110.0),
        }
    }

    pub fn bmi(&self) -> f64 {
        let h = self.height / 100.0;
        self.weight / (h * h)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    #[default]
    Dress,
    Shirt,
    Pants,
    Jacket,
    Skirt,
}

impl crate::core::api::OptionSet for GarmentCategory {
    const ALL: &'static [Self] = &[
        GarmentCategory::Dress,
        GarmentCategory::Shirt,
        GarmentCategory::Pants,
        GarmentCategory::Jacket,
        GarmentCategory::Skirt,
    ];

    fn key(self) -> &'static str {
        match self {
            GarmentCategory::Dress => "dress",
            GarmentCategory::Shirt => "shirt",
            GarmentCategory::Pants => "pants",
            GarmentCategory::Jacket => "jacket",
            GarmentCategory::Skirt => "skirt",
        }
    }

    fn label(self) -> &'static str {
        match self {
            GarmentCategory::Dress => "Dress",
            GarmentCategory::Shirt => "Shirt",
            GarmentCategory::Pants => "Pants",
            GarmentCategory::Jacket => "Jacket",
            GarmentCategory::Skirt => "Skirt",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GarmentStyle {
    pub category: GarmentCategory,
    /// CSS hex color
    pub color: String,
}

impl Default for GarmentStyle {
    fn default() -> Self {
        Self {
            category: GarmentCategory::default(),
            color: DEFAULT_GARMENT_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn mirrored(self) -> Self {
        Self::new(-self.x, self.y, self.z)
    }

    /// Rotate about the vertical axis
    fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
    }

    fn horizontal_reach(self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere {
        center: Vec3,
        radius: f64,
    },
    /// Tapered cylinder between two end points
    Cylinder {
        a: Vec3,
        b: Vec3,
        radius_a: f64,
        radius_b: f64,
    },
    Cuboid {
        center: Vec3,
        /// Full extents along x, y, z
        size: Vec3,
    },
}

impl Primitive {
    fn mirrored(self) -> Self {
        match self {
            Primitive::Sphere { center, radius } => Primitive::Sphere {
                center: center.mirrored(),
                radius,
            },
            Primitive::Cylinder {
                a,
                b,
                radius_a,
                radius_b,
            } => Primitive::Cylinder {
                a: a.mirrored(),
                b: b.mirrored(),
                radius_a,
                radius_b,
            },
            Primitive::Cuboid { center, size } => Primitive::Cuboid {
                center: center.mirrored(),
                size,
            },
        }
    }

    /// Lowest and highest y reached by the solid
    fn vertical_span(&self) -> (f64, f64) {
        match *self {
            Primitive::Sphere { center, radius } => (center.y - radius, center.y + radius),
            Primitive::Cylinder {
                a,
                b,
                radius_a,
                radius_b,
            } => (
                (a.y - radius_a).min(b.y - radius_b),
                (a.y + radius_a).max(b.y + radius_b),
            ),
            Primitive::Cuboid { center, size } => {
                (center.y - size.y / 2.0, center.y + size.y / 2.0)
            }
        }
    }

    /// Largest horizontal distance from the spin axis, valid at any angle
    fn horizontal_reach(&self) -> f64 {
        match *self {
            Primitive::Sphere { center, radius } => center.horizontal_reach() + radius,
            Primitive::Cylinder {
                a,
                b,
                radius_a,
                radius_b,
            } => (a.horizontal_reach() + radius_a).max(b.horizontal_reach() + radius_b),
            Primitive::Cuboid { center, size } => {
                center.horizontal_reach() + (size.x * size.x + size.z * size.z).sqrt() / 2.0
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Head,
    Neck,
    Torso,
    Shoulder,
    Arm,
    Hip,
    Leg,
    Foot,
    Garment,
}

/// Which palette entry fills a part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Skin,
    Shoe,
    Garment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub kind: PartKind,
    pub material: Material,
    pub primitive: Primitive,
}

impl BodyPart {
    fn skin(kind: PartKind, primitive: Primitive) -> Self {
        Self {
            kind,
            material: Material::Skin,
            primitive,
        }
    }

    fn garment(primitive: Primitive) -> Self {
        Self {
            kind: PartKind::Garment,
            material: Material::Garment,
            primitive,
        }
    }
}

/// Key heights of the body, in metres above the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmarks {
    pub head_top: f64,
    pub chin: f64,
    pub shoulder: f64,
    pub chest: f64,
    pub waist: f64,
    pub hip: f64,
    pub crotch: f64,
    pub knee: f64,
    pub ankle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyModel {
    pub parts: Vec<BodyPart>,
    pub landmarks: Landmarks,
}

fn radius_from_circumference(cm: f64) -> f64 {
    cm / 100.0 / (2.0 * PI)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Build the body and its garment drape from measurements
pub fn build_body(measurements: &Measurements, garment: &GarmentStyle) -> BodyModel {
    let m = measurements.clamped();
    let height = m.height / 100.0;

    // Limb thickness follows overall build; torso radii come from circumferences.
    let limb = (m.bmi() / 22.0).clamp(0.8, 1.3).sqrt();

    let r_chest = radius_from_circumference(m.chest);
    let r_waist = radius_from_circumference(m.waist);
    let r_hip = radius_from_circumference(m.hip);

    let head_radius = 0.065 * height;
    let ankle = 0.045 * height;
    let crotch = (m.inseam / 100.0).clamp(0.38 * height, 0.52 * height);
    let hip = crotch + 0.05 * height;
    let shoulder = 0.818 * height;
    let landmarks = Landmarks {
        head_top: height,
        chin: height - 2.0 * head_radius,
        shoulder,
        chest: lerp(hip, shoulder, 0.8),
        waist: lerp(hip, shoulder, 0.45),
        hip,
        crotch,
        knee: lerp(ankle, crotch, 0.5),
        ankle,
    };
    let lm = landmarks;

    let mut parts = Vec::new();

    parts.push(BodyPart::skin(
        PartKind::Head,
        Primitive::Sphere {
            center: Vec3::new(0.0, height - head_radius, 0.0),
            radius: head_radius,
        },
    ));
    parts.push(BodyPart::skin(
        PartKind::Neck,
        Primitive::Cylinder {
            a: Vec3::new(0.0, lm.chin + 0.2 * head_radius, 0.0),
            b: Vec3::new(0.0, lm.shoulder, 0.0),
            radius_a: 0.045 * limb,
            radius_b: 0.05 * limb,
        },
    ));
    parts.push(BodyPart::skin(
        PartKind::Torso,
        Primitive::Cylinder {
            a: Vec3::new(0.0, lm.shoulder, 0.0),
            b: Vec3::new(0.0, lm.chest, 0.0),
            radius_a: r_chest * 0.85,
            radius_b: r_chest,
        },
    ));
    parts.push(BodyPart::skin(
        PartKind::Torso,
        Primitive::Cylinder {
            a: Vec3::new(0.0, lm.chest, 0.0),
            b: Vec3::new(0.0, lm.waist, 0.0),
            radius_a: r_chest,
            radius_b: r_waist,
        },
    ));
    parts.push(BodyPart::skin(
        PartKind::Torso,
        Primitive::Cylinder {
            a: Vec3::new(0.0, lm.waist, 0.0),
            b: Vec3::new(0.0, lm.hip, 0.0),
            radius_a: r_waist,
            radius_b: r_hip * 0.9,
        },
    ));

    // Right side first, then mirrored to the left.
    let half_shoulder = m.shoulder_width / 200.0;
    let shoulder_joint = Vec3::new(half_shoulder, lm.shoulder - 0.02, 0.0);
    let arm_len = m.arm_length / 100.0;
    let arm_tilt = 10.0_f64.to_radians();
    let hand = Vec3::new(
        shoulder_joint.x + arm_tilt.sin() * arm_len,
        shoulder_joint.y - arm_tilt.cos() * arm_len,
        0.0,
    );
    let leg_x = r_hip * 0.5;
    let foot_len = 0.15 * height;

    let paired = [
        BodyPart::skin(
            PartKind::Shoulder,
            Primitive::Sphere {
                center: shoulder_joint,
                radius: 0.055 * limb,
            },
        ),
        BodyPart::skin(
            PartKind::Arm,
            Primitive::Cylinder {
                a: shoulder_joint,
                b: hand,
                radius_a: 0.045 * limb,
                radius_b: 0.032 * limb,
            },
        ),
        BodyPart::skin(
            PartKind::Hip,
            Primitive::Sphere {
                center: Vec3::new(leg_x, lm.hip, 0.0),
                radius: r_hip * 0.6,
            },
        ),
        BodyPart::skin(
            PartKind::Leg,
            Primitive::Cylinder {
                a: Vec3::new(leg_x, lm.crotch + 0.02, 0.0),
                b: Vec3::new(leg_x * 0.9, lm.ankle, 0.0),
                radius_a: 0.085 * limb,
                radius_b: 0.045 * limb,
            },
        ),
        BodyPart {
            kind: PartKind::Foot,
            material: Material::Shoe,
            primitive: Primitive::Cuboid {
                center: Vec3::new(leg_x * 0.9, lm.ankle / 2.0, foot_len * 0.25),
                size: Vec3::new(0.055 * height, lm.ankle, foot_len),
            },
        },
    ];
    for part in paired {
        parts.push(part);
        parts.push(BodyPart {
            primitive: part.primitive.mirrored(),
            ..part
        });
    }

    parts.extend(garment_drape(garment.category, &lm, r_chest, r_waist, r_hip, leg_x, limb));

    BodyModel { parts, landmarks }
}

fn garment_drape(
    category: GarmentCategory,
    lm: &Landmarks,
    r_chest: f64,
    r_waist: f64,
    r_hip: f64,
    leg_x: f64,
    limb: f64,
) -> Vec<BodyPart> {
    let tube = |top: f64, bottom: f64, r_top: f64, r_bottom: f64| {
        BodyPart::garment(Primitive::Cylinder {
            a: Vec3::new(0.0, top, 0.0),
            b: Vec3::new(0.0, bottom, 0.0),
            radius_a: r_top,
            radius_b: r_bottom,
        })
    };

    match category {
        GarmentCategory::Dress => vec![tube(
            lm.shoulder - 0.01,
            lm.knee,
            r_chest * 1.12,
            r_hip * 1.35,
        )],
        GarmentCategory::Shirt => vec![tube(
            lm.shoulder - 0.01,
            lm.hip,
            r_chest * 1.1,
            r_hip * 1.02,
        )],
        GarmentCategory::Jacket => vec![tube(
            lm.shoulder + 0.01,
            lm.hip,
            r_chest * 1.2,
            r_hip * 1.12,
        )],
        GarmentCategory::Skirt => vec![tube(lm.waist, lm.knee, r_waist * 1.1, r_hip * 1.4)],
        GarmentCategory::Pants => {
            let leg = BodyPart::garment(Primitive::Cylinder {
                a: Vec3::new(leg_x, lm.crotch + 0.02, 0.0),
                b: Vec3::new(leg_x * 0.9, lm.ankle + 0.01, 0.0),
                radius_a: 0.1 * limb,
                radius_b: 0.06 * limb,
            });
            vec![
                tube(lm.waist, lm.crotch, r_waist * 1.08, r_hip * 1.05),
                leg,
                BodyPart::garment(leg.primitive.mirrored()),
            ]
        }
    }
}

/// Canvas size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Fraction of the viewport left empty around the body
const VIEWPORT_MARGIN: f64 = 0.06;

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle { cx: f64, cy: f64, r: f64 },
    Polygon(Vec<(f64, f64)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub material: Material,
    /// Rotated z of the part; larger is closer to the viewer
    pub depth: f64,
}

impl Shape {
    /// Every screen-space point the shape touches, for bounds checks
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        match &self.kind {
            ShapeKind::Circle { cx, cy, r } => (cx - r, cy - r, cx + r, cy + r),
            ShapeKind::Polygon(points) => points.iter().fold(
                (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
                |(x0, y0, x1, y1), &(x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            ),
        }
    }
}

impl BodyModel {
    fn bounds(&self) -> (f64, f64, f64) {
        self.parts.iter().fold(
            (f64::MAX, f64::MIN, 0.0_f64),
            |(lo, hi, reach), part| {
                let (bottom, top) = part.primitive.vertical_span();
                (
                    lo.min(bottom),
                    hi.max(top),
                    reach.max(part.primitive.horizontal_reach()),
                )
            },
        )
    }

    /// Rotate by `angle` about the vertical axis and project orthographically
    /// into `viewport`, scaled so the body fits at every angle.
    ///
    /// Shapes are ordered back to front.
    pub fn project(&self, angle: f64, viewport: Viewport) -> Vec<Shape> {
        if self.parts.is_empty() || viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Vec::new();
        }

        let (y_lo, y_hi, reach) = self.bounds();
        let usable_w = viewport.width * (1.0 - 2.0 * VIEWPORT_MARGIN);
        let usable_h = viewport.height * (1.0 - 2.0 * VIEWPORT_MARGIN);
        let scale = (usable_h / (y_hi - y_lo)).min(usable_w / (2.0 * reach.max(1e-6)));

        let cx = viewport.width / 2.0;
        // Center the body's vertical span in the viewport.
        let baseline = viewport.height / 2.0 + (y_hi + y_lo) / 2.0 * scale;
        let to_screen = |p: Vec3| (cx + p.x * scale, baseline - p.y * scale);

        let mut shapes: Vec<Shape> = self
            .parts
            .iter()
            .map(|part| {
                let (kind, depth) = match part.primitive {
                    Primitive::Sphere { center, radius } => {
                        let c = center.rotate_y(angle);
                        let (sx, sy) = to_screen(c);
                        (
                            ShapeKind::Circle {
                                cx: sx,
                                cy: sy,
                                r: radius * scale,
                            },
                            c.z,
                        )
                    }
                    Primitive::Cylinder {
                        a,
                        b,
                        radius_a,
                        radius_b,
                    } => {
                        let (ra, rb) = (a.rotate_y(angle), b.rotate_y(angle));
                        (
                            cylinder_outline(to_screen(ra), to_screen(rb), radius_a * scale, radius_b * scale),
                            (ra.z + rb.z) / 2.0,
                        )
                    }
                    Primitive::Cuboid { center, size } => {
                        let (hx, hy, hz) = (size.x / 2.0, size.y / 2.0, size.z / 2.0);
                        let xs: Vec<f64> = [(-hx, -hz), (hx, -hz), (hx, hz), (-hx, hz)]
                            .iter()
                            .map(|&(dx, dz)| {
                                Vec3::new(center.x + dx, center.y, center.z + dz)
                                    .rotate_y(angle)
                                    .x
                            })
                            .collect();
                        let x0 = xs.iter().copied().fold(f64::MAX, f64::min);
                        let x1 = xs.iter().copied().fold(f64::MIN, f64::max);
                        let (sx0, top) = to_screen(Vec3::new(x0, center.y + hy, 0.0));
                        let (sx1, bottom) = to_screen(Vec3::new(x1, center.y - hy, 0.0));
                        (
                            ShapeKind::Polygon(vec![(sx0, top), (sx1, top), (sx1, bottom), (sx0, bottom)]),
                            center.rotate_y(angle).z,
                        )
                    }
                };
                Shape {
                    kind,
                    material: part.material,
                    depth,
                }
            })
            .collect();

        shapes.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        shapes
    }
}

/// Quad covering a cylinder seen side-on; a cylinder seen end-on is a disc
fn cylinder_outline(a: (f64, f64), b: (f64, f64), ra: f64, rb: f64) -> ShapeKind {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-9 {
        return ShapeKind::Circle {
            cx: a.0,
            cy: a.1,
            r: ra.max(rb),
        };
    }
    let (nx, ny) = (-dy / len, dx / len);
    ShapeKind::Polygon(vec![
        (a.0 + nx * ra, a.1 + ny * ra),
        (b.0 + nx * rb, b.1 + ny * rb),
        (b.0 - nx * rb, b.1 - ny * rb),
        (a.0 - nx * ra, a.1 - ny * ra),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn default_body(category: GarmentCategory) -> BodyModel {
        build_body(
            &Measurements::default(),
            &GarmentStyle {
                category,
                ..Default::default()
            },
        )
    }

    fn garment_parts(model: &BodyModel) -> Vec<Primitive> {
        model
            .parts
            .iter()
            .filter(|p| p.kind == PartKind::Garment)
            .map(|p| p.primitive)
            .collect()
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    #[test]
    fn test_head_top_equals_height() {
        for height in [150.0, 170.0, 195.0] {
            let m = Measurements {
                height,
                ..Default::default()
            };
            let model = build_body(&m, &GarmentStyle::default());
            let head = model
                .parts
                .iter()
                .find(|p| p.kind == PartKind::Head)
                .unwrap();
            let (_, top) = head.primitive.vertical_span();
            assert!((top - height / 100.0).abs() < EPS);
            assert!((model.landmarks.head_top - height / 100.0).abs() < EPS);
        }
    }

    #[test]
    fn test_paired_parts_mirror() {
        let model = default_body(GarmentCategory::Dress);
        for kind in [
            PartKind::Shoulder,
            PartKind::Arm,
            PartKind::Hip,
            PartKind::Leg,
            PartKind::Foot,
        ] {
            let pair: Vec<_> = model.parts.iter().filter(|p| p.kind == kind).collect();
            assert_eq!(pair.len(), 2, "{:?} should come in a pair", kind);
            assert_eq!(pair[0].primitive.mirrored(), pair[1].primitive);
        }
    }

    #[test]
    fn test_landmarks_are_ordered() {
        let lm = default_body(GarmentCategory::Dress).landmarks;
        let order = [
            lm.ankle, lm.knee, lm.crotch, lm.hip, lm.waist, lm.chest, lm.shoulder, lm.chin,
            lm.head_top,
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{:?}", order);
    }

    #[test]
    fn test_torso_radius_follows_circumference() {
        let slim = build_body(
            &Measurements {
                chest: 80.0,
                ..Default::default()
            },
            &GarmentStyle::default(),
        );
        let broad = build_body(
            &Measurements {
                chest: 120.0,
                ..Default::default()
            },
            &GarmentStyle::default(),
        );
        let chest_radius = |m: &BodyModel| match m
            .parts
            .iter()
            .find(|p| p.kind == PartKind::Torso)
            .unwrap()
            .primitive
        {
            Primitive::Cylinder { radius_b, .. } => radius_b,
            _ => unreachable!(),
        };
        assert!((chest_radius(&slim) - 0.8 / (2.0 * PI)).abs() < EPS);
        assert!(chest_radius(&broad) > chest_radius(&slim));
    }

    #[test]
    fn test_absurd_measurements_are_clamped() {
        let m = Measurements {
            height: 1000.0,
            weight: 0.0,
            inseam: -5.0,
            ..Default::default()
        };
        let model = build_body(&m, &GarmentStyle::default());
        assert!((model.landmarks.head_top - 2.3).abs() < EPS);
        assert!(model.landmarks.crotch > 0.0);
    }

    // ========================================================================
    // Garment extents
    // ========================================================================

    #[test]
    fn test_dress_reaches_knees() {
        let model = default_body(GarmentCategory::Dress);
        let garment = garment_parts(&model);
        assert_eq!(garment.len(), 1);
        let (bottom, top) = match garment[0] {
            Primitive::Cylinder { a, b, .. } => (b.y, a.y),
            _ => unreachable!(),
        };
        assert!((bottom - model.landmarks.knee).abs() < EPS);
        assert!(top > model.landmarks.chest);
    }

    #[test]
    fn test_shirt_and_jacket_end_at_hips() {
        for category in [GarmentCategory::Shirt, GarmentCategory::Jacket] {
            let model = default_body(category);
            match garment_parts(&model)[0] {
                Primitive::Cylinder { b, .. } => {
                    assert!((b.y - model.landmarks.hip).abs() < EPS)
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_skirt_runs_waist_to_knee() {
        let model = default_body(GarmentCategory::Skirt);
        match garment_parts(&model)[0] {
            Primitive::Cylinder { a, b, .. } => {
                assert!((a.y - model.landmarks.waist).abs() < EPS);
                assert!((b.y - model.landmarks.knee).abs() < EPS);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_pants_cover_both_legs() {
        let model = default_body(GarmentCategory::Pants);
        let garment = garment_parts(&model);
        assert_eq!(garment.len(), 3);
        let lowest = garment
            .iter()
            .map(|p| p.vertical_span().0)
            .fold(f64::MAX, f64::min);
        assert!(lowest < model.landmarks.knee);
    }

    // ========================================================================
    // Projection
    // ========================================================================

    #[test]
    fn test_projection_fits_viewport_at_any_angle() {
        let model = default_body(GarmentCategory::Dress);
        let viewport = Viewport {
            width: 320.0,
            height: 480.0,
        };
        for step in 0..16 {
            let angle = step as f64 * PI / 8.0;
            for shape in model.project(angle, viewport) {
                let (x0, y0, x1, y1) = shape.extent();
                assert!(x0 >= -EPS && y0 >= -EPS, "angle {angle}: {:?}", shape);
                assert!(x1 <= viewport.width + EPS && y1 <= viewport.height + EPS);
            }
        }
    }

    #[test]
    fn test_projection_is_depth_sorted() {
        let model = default_body(GarmentCategory::Shirt);
        let shapes = model.project(0.7, Viewport { width: 400.0, height: 400.0 });
        assert_eq!(shapes.len(), model.parts.len());
        assert!(shapes.windows(2).all(|w| w[0].depth <= w[1].depth));
    }

    #[test]
    fn test_quarter_turn_brings_foot_forward() {
        let model = default_body(GarmentCategory::Dress);
        let front = model.project(0.0, Viewport { width: 300.0, height: 300.0 });
        let feet: Vec<_> = front.iter().filter(|s| s.material == Material::Shoe).collect();
        // Facing the viewer, both feet sit at the same depth.
        assert!((feet[0].depth - feet[1].depth).abs() < EPS);

        let side = model.project(PI / 2.0, Viewport { width: 300.0, height: 300.0 });
        let feet: Vec<_> = side.iter().filter(|s| s.material == Material::Shoe).collect();
        assert!((feet[0].depth - feet[1].depth).abs() > 0.05);
    }

    #[test]
    fn test_empty_viewport() {
        let model = default_body(GarmentCategory::Dress);
        assert!(model.project(0.0, Viewport { width: 0.0, height: 100.0 }).is_empty());
    }
}
