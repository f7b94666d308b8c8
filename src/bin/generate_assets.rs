//! Sprite asset generator
//!
//! Generates the tennis ball and court textures the game loads at startup.
//! Output is deterministic, so regenerating never dirties the assets.
//!
//! Run with: `cargo run --bin generate_assets`

use image::{Rgba, RgbaImage};
use std::fs;

// Colors
const BALL_FELT: [u8; 4] = [204, 230, 60, 255]; // optic yellow
const BALL_SEAM: [u8; 4] = [245, 245, 240, 255];
const COURT_SURFACE: [u8; 4] = [43, 108, 61, 255];
const COURT_LINE: [u8; 4] = [235, 235, 235, 255];

const BALL_SIZE: u32 = 28;
const COURT_W: u32 = 1063;
const COURT_H: u32 = 1001;
const LINE_WIDTH: u32 = 4;

fn main() {
    fs::create_dir_all("assets").expect("Failed to create assets directory");

    generate_ball("assets/tennis_ball.png");
    println!("  Created: assets/tennis_ball.png ({BALL_SIZE}px)");

    generate_court("assets/court.png");
    println!("  Created: assets/court.png ({COURT_W}x{COURT_H})");

    println!("\nGenerated 2 textures.");
}

/// Tennis ball: felt disc with two curved seams and an antialiased edge
fn generate_ball(path: &str) {
    let size = BALL_SIZE;
    let center = size as f32 / 2.0;
    let radius = center - 1.0;

    let mut img = RgbaImage::new(size, size);

    for pixel in img.pixels_mut() {
        *pixel = Rgba([0, 0, 0, 0]);
    }

    for y in 0..size {
        for x in 0..size {
            let fx = x as f32 - center;
            let fy = y as f32 - center;
            let dist = (fx * fx + fy * fy).sqrt();

            if dist > radius {
                continue;
            }

            let color = if on_seam(fx, fy, radius) {
                BALL_SEAM
            } else {
                BALL_FELT
            };

            // Soft edge, same treatment as the interior/border blend
            let edge_dist = radius - dist;
            let alpha = if edge_dist < 1.5 {
                ((edge_dist / 1.5) * 255.0) as u8
            } else {
                255
            };

            img.put_pixel(x, y, Rgba([color[0], color[1], color[2], alpha]));
        }
    }

    img.save(path).expect("Failed to save ball texture");
}

/// Two mirrored seam arcs, each a circle offset past the ball's edge
fn on_seam(fx: f32, fy: f32, radius: f32) -> bool {
    let seam_radius = radius * 1.35;
    let offset = radius * 1.05;
    let thickness = radius * 0.14;

    let left = ((fx + offset).powi(2) + fy * fy).sqrt();
    let right = ((fx - offset).powi(2) + fy * fy).sqrt();

    (left - seam_radius).abs() < thickness || (right - seam_radius).abs() < thickness
}

/// Court background: surface color, boundary lines, and a net line at
/// half court height
fn generate_court(path: &str) {
    let mut img = RgbaImage::new(COURT_W, COURT_H);

    for pixel in img.pixels_mut() {
        *pixel = Rgba(COURT_SURFACE);
    }

    let line = Rgba(COURT_LINE);

    // Boundary
    fill_rect(&mut img, 0, 0, COURT_W, LINE_WIDTH, line);
    fill_rect(&mut img, 0, COURT_H - LINE_WIDTH, COURT_W, LINE_WIDTH, line);
    fill_rect(&mut img, 0, 0, LINE_WIDTH, COURT_H, line);
    fill_rect(&mut img, COURT_W - LINE_WIDTH, 0, LINE_WIDTH, COURT_H, line);

    // Net across the middle
    let net_y = COURT_H / 2 - LINE_WIDTH / 2;
    fill_rect(&mut img, 0, net_y, COURT_W, LINE_WIDTH, line);

    // Service lines a quarter court from the net, with a center service line
    let service_offset = COURT_H / 4;
    for y in [net_y - service_offset, net_y + service_offset] {
        fill_rect(&mut img, 0, y, COURT_W, LINE_WIDTH, line);
    }
    let center_x = COURT_W / 2 - LINE_WIDTH / 2;
    fill_rect(
        &mut img,
        center_x,
        net_y - service_offset,
        LINE_WIDTH,
        service_offset * 2,
        line,
    );

    img.save(path).expect("Failed to save court texture");
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..(y + h).min(COURT_H) {
        for px in x..(x + w).min(COURT_W) {
            img.put_pixel(px, py, color);
        }
    }
}
