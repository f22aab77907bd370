//! Canvas 2D backend

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::DrawCmd;
use crate::assets::Assets;

/// Replay a draw list onto a 2D context
pub fn draw(ctx: &CanvasRenderingContext2d, cmds: &[DrawCmd], images: &Assets<HtmlImageElement>) {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear { w, h } => ctx.clear_rect(0.0, 0.0, *w as f64, *h as f64),
            DrawCmd::FillRect { rect, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                let _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                ctx.fill();
            }
            DrawCmd::Image { kind, rect } => {
                // The list only names images that were loaded when it was built
                if let Some(img) = images.get(*kind) {
                    let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        img,
                        rect.x as f64,
                        rect.y as f64,
                        rect.w as f64,
                        rect.h as f64,
                    );
                }
            }
        }
    }
}
