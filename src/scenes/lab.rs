use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::figure::RotationAxis::{All, X, Y, Z};
use crate::figure::ShapeKind::{Dodecahedron, Icosahedron, Octahedron, TorusKnot};
use crate::figure::{FigureSpec, ShapeKind};
use crate::math::Color;

/// A cluster of figures placed relative to a shared origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSpec {
    pub origin: Vec3,
    pub figures: [FigureSpec; 3],
}

/// Box wall around the ground plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierSpec {
    pub position: Vec3,
    pub size: Vec3,
    pub rotation: Vec3,
}

pub const GROUND_SIZE: f32 = 20.0;
pub const GROUND_Y: f32 = -0.5;
pub const GROUND_COLOR: Color = Color::LIGHT_GREEN;
pub const BARRIER_COLOR: Color = Color::GRAY;

pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);

pub const BARRIERS: [BarrierSpec; 4] = [
    BarrierSpec {
        position: Vec3::new(0.0, 1.0, 10.0),
        size: Vec3::new(22.0, 2.0, 1.0),
        rotation: Vec3::ZERO,
    },
    BarrierSpec {
        position: Vec3::new(0.0, 1.0, -10.0),
        size: Vec3::new(22.0, 2.0, 1.0),
        rotation: Vec3::ZERO,
    },
    BarrierSpec {
        position: Vec3::new(-10.0, 1.0, 0.0),
        size: Vec3::new(20.0, 2.0, 1.0),
        rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
    },
    BarrierSpec {
        position: Vec3::new(10.0, 1.0, 0.0),
        size: Vec3::new(20.0, 2.0, 1.0),
        rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
    },
];

const fn figure(shape: ShapeKind, hex: u32, x: f32, y: f32, z: f32) -> FigureSpec {
    FigureSpec::new(shape, Color::from_hex(hex), Vec3::new(x, y, z))
}

pub const LAB_GROUPS: [GroupSpec; 5] = [
    GroupSpec {
        origin: Vec3::new(-6.0, 0.0, -6.5),
        figures: [
            figure(TorusKnot, 0xff0000, 0.0, 1.0, 0.0)
                .rotating(0.1, All)
                .moving(0.02)
                .scaled(0.8),
            figure(Icosahedron, 0x0000ff, 2.0, 1.0, 0.0).rotating(0.05, Y),
            figure(Dodecahedron, 0x800080, -2.0, 1.0, 0.0).rotating(0.2, Z),
        ],
    },
    GroupSpec {
        origin: Vec3::new(-3.0, 0.0, 0.2),
        figures: [
            figure(Octahedron, 0xffff00, 0.0, 1.0, 0.0)
                .rotating(0.15, X)
                .scaled(1.2),
            figure(TorusKnot, 0x008000, 2.0, 1.0, 2.0).moving(0.03).scaled(0.7),
            figure(Icosahedron, 0xffa500, -2.0, 1.0, -2.0)
                .rotating(0.1, All)
                .scaled(0.8),
        ],
    },
    GroupSpec {
        origin: Vec3::new(5.5, 0.0, -5.5),
        figures: [
            figure(Dodecahedron, 0xff69b4, 0.0, 1.0, 0.0).rotating(0.25, All),
            figure(Octahedron, 0x00ffff, 2.0, 1.0, 2.0).moving(0.05).scaled(1.2),
            figure(TorusKnot, 0xff00ff, -2.0, 1.0, -2.0)
                .rotating(0.08, Y)
                .scaled(0.7),
        ],
    },
    GroupSpec {
        origin: Vec3::new(-6.5, 0.0, 5.5),
        figures: [
            figure(Icosahedron, 0x00ff00, 0.0, 1.0, 0.0).moving(0.04).scaled(1.1),
            figure(Dodecahedron, 0xff4500, 2.0, 1.0, 2.0).rotating(0.12, Z),
            figure(Octahedron, 0x8a2be2, -2.0, 1.0, -2.0)
                .rotating(0.2, All)
                .scaled(1.2),
        ],
    },
    GroupSpec {
        origin: Vec3::new(5.0, 0.0, 5.0),
        figures: [
            figure(TorusKnot, 0x4b0082, 0.0, 1.0, 0.0)
                .rotating(0.07, X)
                .scaled(0.8),
            figure(Icosahedron, 0xff1493, 2.0, 1.0, 2.0).moving(0.02),
            figure(Dodecahedron, 0x1e90ff, -2.0, 1.0, -2.0).rotating(0.15, Y),
        ],
    },
];
