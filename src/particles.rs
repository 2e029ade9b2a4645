//! Recycling pool for short-lived kinematic particles (rain splashes, snow)

/// A transient kinematic particle owned by a [`ParticlePool`]
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining life in [0, 1]; decreases by `1/max_life` per update
    pub life: f32,
    /// Lifetime in update ticks
    pub max_life: f32,
    pub size: f32,
    /// Derived from `life`, clamped to [0, 1]
    pub opacity: f32,
    /// Added to `vy` before each integration step
    pub gravity: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            life: 1.0,
            max_life: 1.0,
            size: 2.0,
            opacity: 1.0,
            gravity: 0.0,
        }
    }
}

/// Object pool splitting particles into a free list and an active set.
///
/// Grows on demand and never shrinks; once the pool reaches its working
/// size, steady-state operation allocates nothing.
pub struct ParticlePool {
    free: Vec<Particle>,
    active: Vec<Particle>,
}

impl ParticlePool {
    pub fn new(initial_size: usize) -> Self {
        Self {
            free: vec![Particle::default(); initial_size],
            active: Vec::with_capacity(initial_size),
        }
    }

    /// Take a particle from the free list (or allocate one), reset it, and
    /// move it into the active set with `life = 1`.
    pub fn get(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        max_life: f32,
        gravity: f32,
    ) -> &mut Particle {
        let mut p = self.free.pop().unwrap_or_default();
        p.x = x;
        p.y = y;
        p.vx = vx;
        p.vy = vy;
        p.life = 1.0;
        p.max_life = max_life;
        p.opacity = 1.0;
        p.gravity = gravity;
        p.size = 2.0;
        self.active.push(p);
        self.active.last_mut().unwrap()
    }

    /// Advance every active particle one tick: decrement life, recompute
    /// opacity, integrate velocity (gravity first), and recycle the dead.
    pub fn update(&mut self) {
        let mut i = 0;
        while i < self.active.len() {
            let p = &mut self.active[i];
            p.life -= 1.0 / p.max_life;
            p.opacity = p.life.clamp(0.0, 1.0);

            if p.life <= 0.0 {
                self.free.push(self.active.swap_remove(i));
            } else {
                p.vy += p.gravity;
                p.x += p.vx;
                p.y += p.vy;
                i += 1;
            }
        }
    }

    /// The live set, for rendering
    pub fn active(&self) -> &[Particle] {
        &self.active
    }

    /// Mutable access to the live set (wind changes perturb active flakes)
    pub fn active_mut(&mut self) -> &mut [Particle] {
        &mut self.active
    }

    /// Move every active particle back to the free list
    pub fn clear(&mut self) {
        self.free.append(&mut self.active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_count_matches_gets() {
        let mut pool = ParticlePool::new(0);
        for i in 0..10 {
            pool.get(i as f32, 0.0, 0.0, 1.0, 30.0, 0.0);
        }
        assert_eq!(pool.active().len(), 10);

        let mut prefilled = ParticlePool::new(100);
        for _ in 0..5 {
            prefilled.get(0.0, 0.0, 0.0, 0.0, 10.0, 0.0);
        }
        assert_eq!(prefilled.active().len(), 5);
    }

    #[test]
    fn life_decreases_monotonically_until_recycled() {
        let mut pool = ParticlePool::new(0);
        pool.get(0.0, 0.0, 0.0, 0.0, 4.0, 0.0);

        let mut prev = 1.0_f32;
        for _ in 0..3 {
            pool.update();
            assert_eq!(pool.active().len(), 1);
            let life = pool.active()[0].life;
            assert!(life < prev);
            assert!((pool.active()[0].opacity - life.clamp(0.0, 1.0)).abs() < 1e-6);
            prev = life;
        }

        // fourth tick kills it
        pool.update();
        assert_eq!(pool.active().len(), 0);

        // recycled particle comes back with life exactly 1
        let p = pool.get(1.0, 2.0, 0.0, 0.0, 8.0, 0.0);
        assert_eq!(p.life, 1.0);
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn gravity_accumulates_into_velocity_and_position() {
        let g = 0.2_f32;
        let vy0 = 1.0_f32;
        let y0 = 5.0_f32;
        let k = 6;

        let mut pool = ParticlePool::new(0);
        pool.get(0.0, y0, 0.0, vy0, 1000.0, g);
        for _ in 0..k {
            pool.update();
        }

        let p = &pool.active()[0];
        let expected_vy = vy0 + k as f32 * g;
        let expected_y: f32 = y0 + (1..=k).map(|i| vy0 + i as f32 * g).sum::<f32>();
        assert!((p.vy - expected_vy).abs() < 1e-4);
        assert!((p.y - expected_y).abs() < 1e-3);
    }

    #[test]
    fn clear_returns_everything_to_free_list() {
        let mut pool = ParticlePool::new(0);
        for _ in 0..7 {
            pool.get(0.0, 0.0, 0.0, 0.0, 10.0, 0.0);
        }
        pool.clear();
        assert_eq!(pool.active().len(), 0);

        // reuse does not allocate a larger active set than requested
        pool.get(0.0, 0.0, 0.0, 0.0, 10.0, 0.0);
        assert_eq!(pool.active().len(), 1);
    }
}
