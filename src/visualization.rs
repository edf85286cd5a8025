//! 3D view of the animated cube using kiss3d.

use kiss3d::prelude::*;

use kube::cells::{Face, FaceColor};
use kube::engine::CellView;
use kube::MoveScheduler;

/// Fraction of a cell face covered by its sticker.
const STICKER_SCALE: f32 = 0.85;
/// Sticker thickness in world units.
const STICKER_DEPTH: f32 = 0.02;

fn to_color(color: FaceColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::new(r, g, b, 1.0)
}

fn to_vec3(v: cgmath::Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn to_quat(m: cgmath::Matrix3<f32>) -> Quat {
    Quat::from_mat3(&Mat3::from_cols(to_vec3(m.x), to_vec3(m.y), to_vec3(m.z)))
}

/// One scene node belonging to a cell: its body or one of its stickers.
struct RenderedPart {
    node: SceneNode3d,
    /// Centre of the part in model space, before the cell's rotation.
    model_center: Vec3,
}

/// Scene nodes for one cell.
struct RenderedCell {
    id: usize,
    parts: Vec<RenderedPart>,
}

/// Builds nodes for every live cell: a black body plus one thin plate per
/// painted face.
fn build_scene(scene: &mut SceneNode3d, cells: &[CellView]) -> Vec<RenderedCell> {
    cells
        .iter()
        .map(|view| {
            let min = to_vec3(view.min);
            let max = to_vec3(view.max);
            let size = max - min;
            let center = (min + max) / 2.0;

            let body = scene
                .add_cube(size.x, size.y, size.z)
                .set_color(to_color(FaceColor::Black))
                .set_position(center);
            let mut parts = vec![RenderedPart {
                node: body,
                model_center: center,
            }];

            for (face, &color) in Face::ALL.iter().zip(&view.faces) {
                if color == FaceColor::Black {
                    continue;
                }
                let normal = to_vec3(face.normal());
                // plate spans the face and is thin along the normal
                let extent = size * STICKER_SCALE * (Vec3::ONE - normal.abs())
                    + Vec3::splat(STICKER_DEPTH) * normal.abs();
                let offset = normal * (size.abs().dot(normal.abs()) / 2.0 + STICKER_DEPTH / 2.0);
                let sticker_center = center + offset;
                let node = scene
                    .add_cube(extent.x, extent.y, extent.z)
                    .set_color(to_color(color))
                    .set_position(sticker_center);
                parts.push(RenderedPart {
                    node,
                    model_center: sticker_center,
                });
            }

            RenderedCell { id: view.id, parts }
        })
        .collect()
}

/// Moves every node to its cell's current rotation, with the whole cube
/// spun about Y by `spin`.
fn update_scene(rendered: &mut [RenderedCell], cells: &[CellView], spin: Quat) {
    for (cell, view) in rendered.iter_mut().zip(cells) {
        debug_assert_eq!(cell.id, view.id);
        let rotation = spin * to_quat(view.transform);
        for part in &mut cell.parts {
            part.node.set_rotation(rotation);
            part.node.set_position(rotation * part.model_center);
        }
    }
}

fn window_title(scheduler: &MoveScheduler) -> String {
    let state = if scheduler.is_paused() { " (paused)" } else { "" };
    format!(
        "Kube - {} moves{state} - [Space] pause, [Right] step, [R] reset",
        scheduler.completed_moves()
    )
}

/// Runs the interactive viewer until the window closes.
pub fn display(scheduler: MoveScheduler) {
    pollster::block_on(display_async(scheduler));
}

async fn display_async(mut scheduler: MoveScheduler) {
    let mut window = Window::new(&window_title(&scheduler)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(6.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let snapshot = scheduler.snapshot_for_render();
    let mut rendered = build_scene(&mut scene, &snapshot.cells);

    let spin_step = scheduler.config().view_spin_degrees.to_radians();
    let mut view_angle: f32 = 0.0;
    let mut shown_moves = scheduler.completed_moves();

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Space => {
                            if scheduler.is_paused() {
                                scheduler.resume();
                            } else {
                                scheduler.pause();
                            }
                            window.set_title(&window_title(&scheduler));
                        }
                        Key::Right if scheduler.is_paused() => {
                            scheduler.step();
                        }
                        Key::R => {
                            scheduler.reset();
                            view_angle = 0.0;
                        }
                        _ => {}
                    }
                }
            }
        }

        if !scheduler.is_paused() {
            view_angle = (view_angle + spin_step) % std::f32::consts::TAU;
            scheduler.tick();
        }

        if scheduler.completed_moves() != shown_moves {
            shown_moves = scheduler.completed_moves();
            window.set_title(&window_title(&scheduler));
        }

        let snapshot = scheduler.snapshot_for_render();
        update_scene(&mut rendered, &snapshot.cells, Quat::from_rotation_y(view_angle));

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
