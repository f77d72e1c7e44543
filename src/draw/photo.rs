//! The decoded photo as seen by the frame composer.

/// A raster that knows its size and how to paint itself.
///
/// Decoding happens elsewhere; the composer only needs dimensions for the
/// canvas and a way to draw the front side.
pub trait PhotoSurface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn paint(&self, ctx: &cairo::Context);
}

impl PhotoSurface for cairo::ImageSurface {
    fn width(&self) -> i32 {
        cairo::ImageSurface::width(self)
    }

    fn height(&self) -> i32 {
        cairo::ImageSurface::height(self)
    }

    fn paint(&self, ctx: &cairo::Context) {
        let _ = ctx.save();
        if ctx.set_source_surface(self, 0.0, 0.0).is_ok() {
            let _ = ctx.paint();
        }
        let _ = ctx.restore();
    }
}
