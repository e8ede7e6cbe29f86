use glam::Vec2;
use wasm_bindgen::prelude::*;

use morph_core::config::MorphConfig;
use morph_core::engine::MorphEngine;
use morph_core::gesture::GestureSignal;
use morph_core::shapes::cache::ShapeCache;
use morph_core::shapes::ShapeKind;

/// GPU-compatible point: 16 bytes, position plus pad for WGSL alignment.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuPoint {
    position: [f32; 3], // 12 bytes
    _pad: f32,          //  4 bytes
}

#[wasm_bindgen]
pub struct MorphWorld {
    cache: ShapeCache,
    engine: MorphEngine,
    gesture: GestureSignal,
    gpu_buffer: Vec<GpuPoint>,
    /// Point color as rgb in [0,1]; opaque pass-through for the material,
    /// never read by the geometry math.
    color: [f32; 3],
}

#[wasm_bindgen]
impl MorphWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize) -> MorphWorld {
        web_sys::console::log_1(
            &format!("WASM MorphWorld created: {} particles", particle_count).into(),
        );

        let mut cache = ShapeCache::new(particle_count);
        let engine = MorphEngine::new(cache.get(ShapeKind::Sphere), MorphConfig::default());
        let gpu_buffer = vec![
            GpuPoint {
                position: [0.0; 3],
                _pad: 0.0,
            };
            particle_count
        ];

        let mut world = MorphWorld {
            cache,
            engine,
            gesture: GestureSignal::default(),
            gpu_buffer,
            color: [1.0, 1.0, 1.0],
        };
        world.write_gpu_output();
        world
    }

    /// Advance one frame and repack the GPU buffer. Returns the physics
    /// time in milliseconds for the embedder's perf overlay.
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        self.engine.tick(&self.gesture, dt);
        self.write_gpu_output();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    /// Store the latest tracker snapshot. The tracker runs at its own
    /// cadence; a stale value just repeats here until replaced.
    #[wasm_bindgen]
    pub fn set_gesture(&mut self, detected: bool, openness: f32, x: f32, y: f32) {
        self.gesture = GestureSignal {
            detected,
            openness,
            position: Vec2::new(x, y),
        };
    }

    /// Select a target shape by id. Unknown ids fall back to the sphere.
    #[wasm_bindgen]
    pub fn set_shape(&mut self, shape_id: u32) {
        let shape = ShapeKind::from_index(shape_id);
        self.engine.set_target(self.cache.get(shape));
    }

    #[wasm_bindgen]
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = [r, g, b];
    }

    #[wasm_bindgen]
    pub fn color_r(&self) -> f32 {
        self.color[0]
    }

    #[wasm_bindgen]
    pub fn color_g(&self) -> f32 {
        self.color[1]
    }

    #[wasm_bindgen]
    pub fn color_b(&self) -> f32 {
        self.color[2]
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        self.gpu_buffer.len() * std::mem::size_of::<GpuPoint>()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.engine.particle_count()
    }

    #[wasm_bindgen]
    pub fn rotation_x(&self) -> f32 {
        self.engine.rotation().x
    }

    #[wasm_bindgen]
    pub fn rotation_y(&self) -> f32 {
        self.engine.rotation().y
    }

    #[wasm_bindgen]
    pub fn rotation_z(&self) -> f32 {
        self.engine.rotation().z
    }
}

impl MorphWorld {
    fn write_gpu_output(&mut self) {
        for (point, gpu) in self
            .engine
            .particles()
            .positions()
            .chunks_exact(3)
            .zip(self.gpu_buffer.iter_mut())
        {
            gpu.position = [point[0], point[1], point[2]];
        }
    }
}
