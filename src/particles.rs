//! Floating gradient-particle backdrop for the home page. Purely
//! decorative: a fixed, pointer-transparent layer of blurred shapes whose
//! drift animations come from the stylesheet.

use leptos::*;

const PARTICLE_COLORS: &[&str] = &[
    "from-cyan-400 to-purple-500",
    "from-emerald-400 to-cyan-400",
    "from-purple-400 to-pink-500",
    "from-yellow-400 to-orange-500",
    "from-pink-400 to-cyan-400",
    "from-blue-400 to-fuchsia-500",
    "from-emerald-400 to-blue-400",
    "from-purple-400 to-emerald-400",
];

const SHAPES: &[&str] = &["rounded-full", "rounded-2xl", "rounded-md"];

const PARTICLE_COUNT: usize = 28;

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    size: f64,
    blur: f64,
    left: f64,
    top: f64,
    duration: f64,
    delay: f64,
    opacity: f64,
    scale: f64,
    color: &'static str,
    shape: &'static str,
    reverse: bool,
    glow: bool,
    orbit: bool,
}

/// One batch of randomized particles. `rand` supplies draws in `[0, 1)`;
/// colors and shapes cycle by index, the rest is scattered per draw.
fn scatter(count: usize, mut rand: impl FnMut() -> f64) -> Vec<Particle> {
    let mut range = move |min: f64, max: f64| min + rand() * (max - min);
    (0..count)
        .map(|index| Particle {
            size: range(18.0, 54.0),
            blur: range(4.0, 18.0),
            left: range(0.0, 100.0),
            top: range(0.0, 100.0),
            duration: range(7.0, 16.0),
            delay: range(0.0, 8.0),
            opacity: range(0.16, 0.32),
            scale: range(0.85, 1.18),
            color: PARTICLE_COLORS[index % PARTICLE_COLORS.len()],
            shape: SHAPES[index % SHAPES.len()],
            reverse: index % 2 == 0,
            glow: range(0.0, 1.0) < 0.5,
            orbit: range(0.0, 1.0) < 0.5,
        })
        .collect()
}

impl Particle {
    fn class(&self) -> String {
        format!(
            "absolute {} bg-gradient-to-br {} transition-transform duration-1000{}{}{}",
            self.shape,
            self.color,
            if self.glow {
                " shadow-[0_0_32px_8px_rgba(0,255,255,0.18)]"
            } else {
                ""
            },
            if self.orbit {
                " animate-orbit-particle"
            } else {
                " animate-float-particle"
            },
            if self.reverse { " reverse-float" } else { "" },
        )
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.0}px; height: {:.0}px; \
opacity: {:.2}; filter: blur({:.1}px); animation-delay: {:.1}s; \
animation-duration: {:.1}s; transform: scale({:.2});",
            self.left,
            self.top,
            self.size,
            self.size,
            self.opacity,
            self.blur,
            self.delay,
            self.duration,
            self.scale,
        )
    }
}

#[component]
pub fn Particles() -> impl IntoView {
    let particles = scatter(PARTICLE_COUNT, js_sys::Math::random);
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none z-0" aria-hidden="true">
            {particles
                .into_iter()
                .map(|particle| {
                    view! { <div class=particle.class() style=particle.style()></div> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_rand() -> impl FnMut() -> f64 {
        let mut step = 0usize;
        move || {
            let draws = [0.0, 0.25, 0.5, 0.75, 0.999];
            let value = draws[step % draws.len()];
            step += 1;
            value
        }
    }

    #[test]
    fn scatter_stays_inside_the_attribute_ranges() {
        let particles = scatter(PARTICLE_COUNT, fake_rand());
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for particle in &particles {
            assert!((18.0..54.0).contains(&particle.size));
            assert!((4.0..18.0).contains(&particle.blur));
            assert!((0.0..100.0).contains(&particle.left));
            assert!((0.0..100.0).contains(&particle.top));
            assert!((0.16..0.32).contains(&particle.opacity));
            assert!((0.85..1.18).contains(&particle.scale));
        }
    }

    #[test]
    fn colors_and_shapes_cycle_while_reverse_alternates() {
        let particles = scatter(10, fake_rand());
        assert_eq!(particles[0].color, particles[8].color);
        assert_eq!(particles[0].shape, particles[3].shape);
        assert!(particles[0].reverse);
        assert!(!particles[1].reverse);
        assert_ne!(particles[0].color, particles[1].color);
    }

    #[test]
    fn style_strings_render_every_attribute() {
        let particle = &scatter(1, fake_rand())[0];
        let style = particle.style();
        assert!(style.contains("left:"));
        assert!(style.contains("blur("));
        assert!(style.contains("animation-duration:"));
        assert!(particle.class().contains("bg-gradient-to-br"));
    }
}
