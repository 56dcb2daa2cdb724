// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// GPU-accelerated intensity histogram.
// This module is compiled only when the `gpu_support` feature is enabled.

#![cfg(feature = "gpu_support")]

use crate::estimators::approaches::histogram::distribution::INTENSITY_LEVELS;
use futures_intrusive::channel::shared::oneshot_channel;
use ndarray::ArrayView2;
use pollster::block_on;
use tracing::warn;
use wgpu::util::DeviceExt;

/// Images smaller than this are always counted on the CPU.
pub const GPU_MIN_PIXELS: usize = 1 << 16;

const WORKGROUP_SIZE: u32 = 256;
const MAX_WORKGROUPS: u32 = 65_535;

/// Try to count the 256-bin intensity histogram on the GPU.
///
/// Pixels are packed four per `u32` and each invocation adds its bytes to a
/// shared atomic bin array. Returns `None` when no adapter or device can be
/// obtained, when the image exceeds a single dispatch, or on any readback
/// failure; callers should then fall back to the CPU.
pub fn gpu_intensity_histogram(pixels: ArrayView2<'_, u8>) -> Option<[u64; INTENSITY_LEVELS]> {
    let total = pixels.len();
    if total == 0 {
        return Some([0; INTENSITY_LEVELS]);
    }
    let Ok(total_u32) = u32::try_from(total) else {
        warn!(pixels = total, "image too large for GPU histogram, using CPU");
        return None;
    };

    // Pack bytes little-endian, four per word; the tail word is zero-padded
    // and masked out in the shader by `total`.
    let bytes: Vec<u8> = pixels.iter().copied().collect();
    let words: Vec<u32> = bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect();
    let word_count = words.len() as u32;
    let wg_count = word_count.div_ceil(WORKGROUP_SIZE);
    if wg_count > MAX_WORKGROUPS {
        warn!(pixels = total, "image exceeds one GPU dispatch, using CPU");
        return None;
    }

    // Initialize wgpu
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = match block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: None,
        force_fallback_adapter: false,
    })) {
        Ok(adapter) => adapter,
        Err(e) => {
            warn!(error = %e, "no GPU adapter for intensity histogram, using CPU");
            return None;
        }
    };

    let (device, queue) = match block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: Some("Intensity Histogram Device"),
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::default(),
        memory_hints: wgpu::MemoryHints::default(),
        trace: wgpu::Trace::default(),
    })) {
        Ok(pair) => pair,
        Err(e) => {
            warn!(error = %e, "GPU device request failed, using CPU");
            return None;
        }
    };

    // Buffers
    let input_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Histogram Input Buffer"),
        contents: bytemuck::cast_slice(&words),
        usage: wgpu::BufferUsages::STORAGE,
    });

    let bins_size = (INTENSITY_LEVELS * std::mem::size_of::<u32>()) as u64;
    // wgpu zero-initializes new buffers, so the bins start empty.
    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Histogram Bins Buffer"),
        size: bins_size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: false,
    });

    let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Histogram Staging Buffer"),
        size: bins_size,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    // Uniforms
    #[repr(C)]
    #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
    struct Config {
        total: u32,
        words: u32,
        _pad0: u32,
        _pad1: u32,
    }
    let cfg = Config {
        total: total_u32,
        words: word_count,
        _pad0: 0,
        _pad1: 0,
    };
    let config_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Histogram Config Buffer"),
        contents: bytemuck::bytes_of(&cfg),
        usage: wgpu::BufferUsages::UNIFORM,
    });

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Intensity Histogram Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("histogram.wgsl").into()),
    });

    let storage_entry = |binding: u32, read_only: bool| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    };
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Histogram BGL"),
        entries: &[
            storage_entry(0, true),
            storage_entry(1, false),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Histogram Pipeline Layout"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
        label: Some("Histogram Pipeline"),
        layout: Some(&pipeline_layout),
        module: &shader,
        entry_point: Some("main"),
        compilation_options: wgpu::PipelineCompilationOptions::default(),
        cache: None,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Histogram BG"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: input_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: output_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: config_buffer.as_entire_binding(),
            },
        ],
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Histogram Encoder"),
    });
    {
        let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("Histogram Compute Pass"),
            timestamp_writes: None,
        });
        cpass.set_pipeline(&pipeline);
        cpass.set_bind_group(0, &bind_group, &[]);
        cpass.dispatch_workgroups(wg_count, 1, 1);
    }
    encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, bins_size);
    queue.submit(std::iter::once(encoder.finish()));

    // Read back
    let slice = staging_buffer.slice(..);
    let (sender, receiver) = oneshot_channel();
    slice.map_async(wgpu::MapMode::Read, move |v| {
        sender.send(v).ok();
    });
    if let Err(e) = device.poll(wgpu::PollType::Wait) {
        warn!(error = %e, "GPU device poll failed, using CPU");
        return None;
    }
    match block_on(receiver.receive()) {
        Some(Ok(())) => {}
        _ => {
            warn!("GPU histogram readback failed, using CPU");
            return None;
        }
    }
    let view = slice.get_mapped_range();
    let bins: Vec<u32> = bytemuck::cast_slice(&view).to_vec();
    drop(view);
    staging_buffer.unmap();

    let mut counts = [0u64; INTENSITY_LEVELS];
    for (dst, &src) in counts.iter_mut().zip(bins.iter()) {
        *dst = u64::from(src);
    }
    Some(counts)
}
