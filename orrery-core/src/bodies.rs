/// Celestial body descriptors for the simplified solar system
///
/// A fixed ordered table: index 0 is the central star, indices 1-8 the
/// orbiting bodies in ascending orbital distance. The table is static data
/// and never mutated.

/// Ring attachment drawn as an annular disk around a body
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    /// Inner disk radius as a multiple of the body radius
    pub inner_scale: f32,
    /// Outer disk radius as a multiple of the body radius
    pub outer_scale: f32,
    pub color: [f32; 3],
}

/// Immutable description of one body in the system
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub name: &'static str,
    pub radius: f32,
    /// Orbital distance from the parent body (0 for the star)
    pub distance: f32,
    /// Orbital period in days (0 for the star)
    pub orbital_period: f32,
    /// Axial spin multiplier; the gas giants spin twice as fast
    pub spin_factor: f32,
    pub color: [f32; 3],
    pub ring: Option<Ring>,
}

/// Number of orbiting bodies (the table minus the star)
pub const ORBITING_BODIES: usize = 8;

pub const BODIES: [Body; ORBITING_BODIES + 1] = [
    Body {
        name: "Sun",
        radius: 3.0,
        distance: 0.0,
        orbital_period: 0.0,
        spin_factor: 0.0,
        color: [1.0, 0.8, 0.0],
        ring: None,
    },
    Body {
        name: "Mercury",
        radius: 0.3,
        distance: 4.0,
        orbital_period: 88.0,
        spin_factor: 1.0,
        color: [0.5, 0.5, 0.5],
        ring: None,
    },
    Body {
        name: "Venus",
        radius: 0.5,
        distance: 6.0,
        orbital_period: 225.0,
        spin_factor: 1.0,
        color: [0.9, 0.6, 0.1],
        ring: None,
    },
    Body {
        name: "Earth",
        radius: 0.6,
        distance: 8.0,
        orbital_period: 365.0,
        spin_factor: 1.0,
        color: [0.0, 0.5, 1.0],
        ring: None,
    },
    Body {
        name: "Mars",
        radius: 0.4,
        distance: 10.0,
        orbital_period: 687.0,
        spin_factor: 1.0,
        color: [0.8, 0.3, 0.1],
        ring: None,
    },
    Body {
        name: "Jupiter",
        radius: 1.5,
        distance: 15.0,
        orbital_period: 4333.0,
        spin_factor: 2.0,
        color: [0.8, 0.7, 0.5],
        ring: None,
    },
    Body {
        name: "Saturn",
        radius: 1.2,
        distance: 18.0,
        orbital_period: 10759.0,
        spin_factor: 2.0,
        color: [0.9, 0.8, 0.6],
        ring: Some(Ring {
            inner_scale: 1.25,
            outer_scale: 1.75,
            color: [0.5, 0.5, 0.5],
        }),
    },
    Body {
        name: "Uranus",
        radius: 0.8,
        distance: 21.0,
        orbital_period: 30687.0,
        spin_factor: 2.0,
        color: [0.6, 0.8, 0.9],
        ring: None,
    },
    Body {
        name: "Neptune",
        radius: 0.8,
        distance: 24.0,
        orbital_period: 60190.0,
        spin_factor: 2.0,
        color: [0.2, 0.4, 0.7],
        ring: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(BODIES.len(), 9);
        assert_eq!(BODIES[0].name, "Sun");
        assert_eq!(BODIES[0].distance, 0.0);
    }

    #[test]
    fn test_orbiting_bodies_sorted_by_distance() {
        for pair in BODIES[1..].windows(2) {
            assert!(pair[0].distance < pair[1].distance);
        }
    }

    #[test]
    fn test_only_saturn_has_a_ring() {
        let ringed: Vec<&str> = BODIES
            .iter()
            .filter(|b| b.ring.is_some())
            .map(|b| b.name)
            .collect();
        assert_eq!(ringed, ["Saturn"]);
    }

    #[test]
    fn test_gas_giants_spin_faster() {
        for body in &BODIES[1..5] {
            assert_eq!(body.spin_factor, 1.0, "{}", body.name);
        }
        for body in &BODIES[5..] {
            assert_eq!(body.spin_factor, 2.0, "{}", body.name);
        }
    }
}
