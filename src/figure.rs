use glam::{DVec3, Vec3};
use serde::Serialize;
use std::convert::Infallible;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::math::{Color, Transform};
use crate::scene::NodeId;
use crate::traits::SceneGraph;

/// Maximum distance a moving figure may drift from its origin x before it turns around
pub const BOUNCE_LIMIT: f32 = 1.5;

/// Z rotation runs at half the X/Y rate to keep the wobble
pub const Z_ROTATION_FACTOR: f32 = 0.5;

/// Shape of a figure's mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Sphere,
    TorusKnot,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Sphere,
        ShapeKind::TorusKnot,
        ShapeKind::Octahedron,
        ShapeKind::Dodecahedron,
        ShapeKind::Icosahedron,
    ];

    /// Parse a shape name, falling back to a sphere for anything unrecognized
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "torusknot" | "torus_knot" | "torus-knot" => ShapeKind::TorusKnot,
            "octahedron" => ShapeKind::Octahedron,
            "dodecahedron" => ShapeKind::Dodecahedron,
            "icosahedron" => ShapeKind::Icosahedron,
            _ => ShapeKind::Sphere,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::TorusKnot => "TorusKnot",
            ShapeKind::Octahedron => "Octahedron",
            ShapeKind::Dodecahedron => "Dodecahedron",
            ShapeKind::Icosahedron => "Icosahedron",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which local axes receive the per-frame rotation increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RotationAxis {
    X,
    Y,
    Z,
    #[default]
    All,
}

impl RotationAxis {
    const fn rotates_x(self) -> bool {
        matches!(self, RotationAxis::X | RotationAxis::All)
    }

    const fn rotates_y(self) -> bool {
        matches!(self, RotationAxis::Y | RotationAxis::All)
    }

    const fn rotates_z(self) -> bool {
        matches!(self, RotationAxis::Z | RotationAxis::All)
    }
}

/// Authoring-time description of one animated figure.
///
/// `origin` is relative to the owning group's origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureSpec {
    pub shape: ShapeKind,
    pub color: Color,
    pub origin: Vec3,
    pub rotation_speed: f32,
    pub move_speed: f32,
    pub scale: Vec3,
    pub rotation_axis: RotationAxis,
}

impl FigureSpec {
    /// A white sphere at the group origin that never moves
    pub const DEFAULT: FigureSpec = FigureSpec {
        shape: ShapeKind::Sphere,
        color: Color::WHITE,
        origin: Vec3::ZERO,
        rotation_speed: 0.0,
        move_speed: 0.0,
        scale: Vec3::ONE,
        rotation_axis: RotationAxis::All,
    };

    pub const fn new(shape: ShapeKind, color: Color, origin: Vec3) -> Self {
        Self {
            shape,
            color,
            origin,
            ..Self::DEFAULT
        }
    }

    pub const fn rotating(mut self, speed: f32, axis: RotationAxis) -> Self {
        self.rotation_speed = speed;
        self.rotation_axis = axis;
        self
    }

    pub const fn moving(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    pub const fn scaled(mut self, factor: f32) -> Self {
        self.scale = Vec3::splat(factor);
        self
    }

    /// Transform the figure starts with, relative to its group
    pub fn initial_transform(&self) -> Transform {
        Transform {
            position: self.origin,
            rotation: Vec3::ZERO,
            scale: self.scale,
        }
    }
}

impl Default for FigureSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Mutable per-figure animation state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureRuntimeState {
    /// Accumulated angles, unwrapped. f64 so per-frame steps stay exact
    /// after hours of spinning.
    pub rotation: DVec3,
    pub offset_x: f32,
    /// Always +1.0 or -1.0
    pub direction: f32,
}

impl Default for FigureRuntimeState {
    fn default() -> Self {
        Self {
            rotation: DVec3::ZERO,
            offset_x: 0.0,
            direction: 1.0,
        }
    }
}

impl FigureRuntimeState {
    /// Advance one frame.
    ///
    /// The bounce check runs after the move, so the figure may overshoot
    /// the limit by at most one step before heading back.
    pub fn advance(&mut self, spec: &FigureSpec) {
        let axis = spec.rotation_axis;
        let speed = spec.rotation_speed as f64;
        if axis.rotates_x() {
            self.rotation.x += speed;
        }
        if axis.rotates_y() {
            self.rotation.y += speed;
        }
        if axis.rotates_z() {
            self.rotation.z += speed * Z_ROTATION_FACTOR as f64;
        }

        if spec.move_speed != 0.0 {
            self.offset_x += spec.move_speed * self.direction;
            if self.offset_x.abs() > BOUNCE_LIMIT {
                self.direction = -self.direction;
            }
        }
    }

    /// Rotation reduced to [0, 2π) per axis, as written into the transform
    pub fn wrapped_rotation(&self) -> Vec3 {
        self.rotation.map(|a| a.rem_euclid(TAU)).as_vec3()
    }
}

/// Drives one figure's transform once per rendered frame
#[derive(Debug, Clone)]
pub struct FigureAnimator {
    spec: FigureSpec,
    state: FigureRuntimeState,
}

impl FigureAnimator {
    pub fn new(spec: FigureSpec) -> Self {
        Self {
            spec,
            state: FigureRuntimeState::default(),
        }
    }

    pub fn spec(&self) -> &FigureSpec {
        &self.spec
    }

    pub fn state(&self) -> &FigureRuntimeState {
        &self.state
    }

    /// Advance the animation and write the result into the figure's local transform
    pub fn step(&mut self, transform: &mut Transform) {
        self.state.advance(&self.spec);
        transform.rotation = self.state.wrapped_rotation();
        transform.position.x = self.spec.origin.x + self.state.offset_x;
    }
}

/// Every animated figure in a scene, paired with the node it drives
#[derive(Debug, Clone, Default)]
pub struct FigureSet {
    figures: Vec<(NodeId, FigureAnimator)>,
}

impl FigureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, animator: FigureAnimator) {
        self.figures.push((node, animator));
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NodeId, FigureAnimator)> {
        self.figures.iter()
    }

    /// One animation frame for every figure, in insertion order
    pub fn step<G: SceneGraph + ?Sized>(&mut self, graph: &mut G) {
        for (node, animator) in &mut self.figures {
            animator.step(graph.transform_mut(*node));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_name_known() {
        assert_eq!(ShapeKind::from_name("TorusKnot"), ShapeKind::TorusKnot);
        assert_eq!(ShapeKind::from_name("octahedron"), ShapeKind::Octahedron);
        assert_eq!(ShapeKind::from_name(" Icosahedron "), ShapeKind::Icosahedron);
        assert_eq!(ShapeKind::from_name("Dodecahedron"), ShapeKind::Dodecahedron);
    }

    #[test]
    fn test_shape_from_name_falls_back_to_sphere() {
        assert_eq!(ShapeKind::from_name("Cone"), ShapeKind::Sphere);
        assert_eq!(ShapeKind::from_name(""), ShapeKind::Sphere);
        assert_eq!("Teapot".parse::<ShapeKind>(), Ok(ShapeKind::Sphere));
    }

    #[test]
    fn test_shape_name_round_trips() {
        for shape in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_name(&shape.to_string()), shape);
        }
    }

    #[test]
    fn test_spec_defaults() {
        let spec = FigureSpec::new(ShapeKind::Octahedron, Color::from_hex(0x00ffff), Vec3::ONE);
        assert_eq!(spec.rotation_speed, 0.0);
        assert_eq!(spec.move_speed, 0.0);
        assert_eq!(spec.scale, Vec3::ONE);
        assert_eq!(spec.rotation_axis, RotationAxis::All);
    }

    #[test]
    fn test_single_axis_x() {
        let spec = FigureSpec::DEFAULT.rotating(0.15, RotationAxis::X);
        let mut state = FigureRuntimeState::default();
        state.advance(&spec);

        assert!((state.rotation.x - 0.15).abs() < 1e-6);
        assert_eq!(state.rotation.y, 0.0);
        assert_eq!(state.rotation.z, 0.0);
    }

    #[test]
    fn test_single_axis_z_is_damped() {
        let spec = FigureSpec::DEFAULT.rotating(0.2, RotationAxis::Z);
        let mut state = FigureRuntimeState::default();
        state.advance(&spec);

        assert!((state.rotation.z - 0.1).abs() < 1e-6);
        assert_eq!(state.rotation.x, 0.0);
        assert_eq!(state.rotation.y, 0.0);
    }

    #[test]
    fn test_wrapped_rotation_stays_in_one_turn() {
        let state = FigureRuntimeState {
            rotation: DVec3::new(7.0, -1.0, 0.5),
            ..Default::default()
        };
        let wrapped = state.wrapped_rotation();

        assert!((wrapped.x - (7.0 - std::f32::consts::TAU)).abs() < 1e-5);
        assert!((wrapped.y - (std::f32::consts::TAU - 1.0)).abs() < 1e-5);
        assert_eq!(wrapped.z, 0.5);
    }

    #[test]
    fn test_negative_direction_moves_left() {
        let spec = FigureSpec::DEFAULT.moving(0.5);
        let mut state = FigureRuntimeState {
            direction: -1.0,
            ..Default::default()
        };
        state.advance(&spec);
        assert!((state.offset_x + 0.5).abs() < 1e-6);
        assert_eq!(state.direction, -1.0);
    }

    #[test]
    fn test_step_writes_transform() {
        let spec = FigureSpec::new(ShapeKind::TorusKnot, Color::WHITE, Vec3::new(2.0, 1.0, 2.0))
            .moving(0.25)
            .rotating(0.1, RotationAxis::Y)
            .scaled(0.7);
        let mut animator = FigureAnimator::new(spec);
        let mut transform = spec.initial_transform();

        animator.step(&mut transform);
        animator.step(&mut transform);

        assert!((transform.position.x - 2.5).abs() < 1e-6);
        assert_eq!(transform.position.y, 1.0);
        assert_eq!(transform.position.z, 2.0);
        assert!((transform.rotation.y - 0.2).abs() < 1e-6);
        assert_eq!(transform.scale, Vec3::splat(0.7));
    }
}
