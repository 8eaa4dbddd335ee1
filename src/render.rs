// Render step: what gets drawn where, independent of the backing surface.
use crate::error::Result;
use crate::state::{DrawParams, ImageSize, Viewport};
use crate::util::cwarn;

/// One redraw: the image scaled to `width`x`height` with its top-left at
/// (`x`, `y`), after the whole viewport has been cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub viewport: Viewport,
}

impl Frame {
    pub fn new(params: &DrawParams, image: ImageSize, viewport: Viewport) -> Self {
        Self {
            x: params.x,
            y: params.y,
            width: params.compute_width(image),
            height: params.compute_height(image),
            viewport,
        }
    }
}

pub trait DrawSurface {
    type Image;

    fn clear(&mut self, viewport: Viewport);

    fn draw(&mut self, image: &Self::Image, frame: &Frame) -> Result<()>;
}

pub fn render<S: DrawSurface>(surface: &mut S, image: &S::Image, frame: &Frame) {
    surface.clear(frame.viewport);
    if let Err(err) = surface.draw(image, frame) {
        cwarn(&format!("redraw failed: {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CutterError;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(Viewport),
        Draw(&'static str, Frame),
    }

    #[derive(Default)]
    pub struct Recorder {
        pub ops: Vec<Op>,
        pub fail: bool,
    }

    impl DrawSurface for Recorder {
        type Image = &'static str;

        fn clear(&mut self, viewport: Viewport) {
            self.ops.push(Op::Clear(viewport));
        }

        fn draw(&mut self, image: &Self::Image, frame: &Frame) -> Result<()> {
            if self.fail {
                return Err(CutterError::Surface("broken".to_string()));
            }
            self.ops.push(Op::Draw(image, *frame));
            Ok(())
        }
    }

    #[test]
    fn frame_uses_computed_size() {
        let vp = Viewport::new(300.0, 200.0);
        let img = ImageSize::new(600.0, 100.0).unwrap();
        let params = DrawParams::centered(vp, img);
        let frame = Frame::new(&params, img, vp);
        assert_eq!(
            frame,
            Frame {
                x: -450.0,
                y: 0.0,
                width: 1200.0,
                height: 200.0,
                viewport: vp
            }
        );
    }

    #[test]
    fn render_clears_then_draws() {
        let vp = Viewport::new(10.0, 10.0);
        let frame = Frame {
            x: -1.0,
            y: -2.0,
            width: 20.0,
            height: 30.0,
            viewport: vp,
        };
        let mut surface = Recorder::default();
        render(&mut surface, &"photo", &frame);
        assert_eq!(surface.ops, vec![Op::Clear(vp), Op::Draw("photo", frame)]);
    }

    #[test]
    fn failed_draw_still_clears() {
        let vp = Viewport::new(10.0, 10.0);
        let frame = Frame {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            viewport: vp,
        };
        let mut surface = Recorder {
            fail: true,
            ..Default::default()
        };
        render(&mut surface, &"photo", &frame);
        assert_eq!(surface.ops, vec![Op::Clear(vp)]);
    }
}
