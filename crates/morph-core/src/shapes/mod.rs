/// Procedural target-shape generators and the per-shape memo cache.
pub mod cache;
pub mod generators;

/// The closed set of selectable target shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Galaxy,
    Heart,
    Flower,
    Saturn,
    Fireworks,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Galaxy,
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Fireworks,
        ShapeKind::Sphere,
    ];

    /// Map an embedder-facing id to a shape.
    ///
    /// Unknown ids fall back to `Sphere` rather than failing: shape
    /// selection is a closed set on our side, but the id crosses an FFI
    /// boundary and must fail closed.
    pub fn from_index(id: u32) -> Self {
        match id {
            0 => ShapeKind::Galaxy,
            1 => ShapeKind::Heart,
            2 => ShapeKind::Flower,
            3 => ShapeKind::Saturn,
            4 => ShapeKind::Fireworks,
            5 => ShapeKind::Sphere,
            _ => ShapeKind::Sphere,
        }
    }
}
