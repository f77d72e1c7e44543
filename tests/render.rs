use cairo::{Context, ImageSurface};
use photomark::annotation::DrawingAttributes;
use photomark::composer::FrameComposer;
use photomark::draw::{BLUE, MonospaceMetrics, PangoMetrics};
use photomark::input::{CommitKey, InputEvent, Key};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn red_photo(width: i32, height: i32) -> ImageSurface {
    let (surface, ctx) = surface_with_context(width, height);
    ctx.set_source_rgb(1.0, 0.0, 0.0);
    ctx.paint().unwrap();
    drop(ctx);
    surface
}

/// Returns (r, g, b) of the pixel at `(x, y)`.
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8) {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    let px = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    ((px >> 16) as u8, (px >> 8) as u8, px as u8)
}

fn flip_to_back(composer: &mut FrameComposer) {
    composer.on_pointer_down(0, 0, 1).unwrap();
    composer.on_pointer_down(0, 0, 2).unwrap();
}

#[test]
fn front_side_shows_the_photo() {
    let photo = red_photo(60, 40);
    let composer = FrameComposer::new(DrawingAttributes::default(), 60, CommitKey::Return);
    let metrics = MonospaceMetrics::new(10, 20);

    let (mut surface, ctx) = surface_with_context(60, 40);
    composer.render(&ctx, &photo, &metrics);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 30, 20), (255, 0, 0));
}

#[test]
fn back_side_is_white_canvas_with_strokes() {
    let photo = red_photo(60, 40);
    let mut composer = FrameComposer::new(DrawingAttributes::default(), 60, CommitKey::Return);
    flip_to_back(&mut composer);
    composer.set_draw_color(BLUE);
    composer.set_stroke_thickness(4.0);
    for x in [5, 30, 55] {
        composer.handle(InputEvent::PointerDrag { x, y: 20 }).unwrap();
    }
    composer.handle(InputEvent::PointerUp { x: 55, y: 20 }).unwrap();

    let metrics = MonospaceMetrics::new(10, 20);
    let (mut surface, ctx) = surface_with_context(60, 40);
    composer.render(&ctx, &photo, &metrics);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 1, 1), (255, 255, 255));
    let (r, g, b) = pixel(&mut surface, 30, 20);
    assert!(b > 200 && r < 50 && g < 50, "stroke pixel was {:?}", (r, g, b));
}

#[test]
fn pen_up_leaves_a_gap() {
    let photo = red_photo(100, 40);
    let mut composer = FrameComposer::new(DrawingAttributes::default(), 100, CommitKey::Return);
    flip_to_back(&mut composer);
    composer.set_stroke_thickness(2.0);
    composer.handle(InputEvent::PointerDrag { x: 5, y: 20 }).unwrap();
    composer.handle(InputEvent::PointerDrag { x: 30, y: 20 }).unwrap();
    composer.handle(InputEvent::PointerUp { x: 30, y: 20 }).unwrap();
    composer.handle(InputEvent::PointerDrag { x: 70, y: 20 }).unwrap();
    composer.handle(InputEvent::PointerDrag { x: 95, y: 20 }).unwrap();
    composer.handle(InputEvent::PointerUp { x: 95, y: 20 }).unwrap();

    let metrics = MonospaceMetrics::new(10, 20);
    let (mut surface, ctx) = surface_with_context(100, 40);
    composer.render(&ctx, &photo, &metrics);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 50, 20), (255, 255, 255));
    assert_ne!(pixel(&mut surface, 15, 20), (255, 255, 255));
    assert_ne!(pixel(&mut surface, 80, 20), (255, 255, 255));
}

#[test]
fn typed_text_paints_on_the_back() {
    let photo = red_photo(200, 80);
    let mut composer = FrameComposer::new(DrawingAttributes::default(), 200, CommitKey::Return);
    flip_to_back(&mut composer);
    composer.on_pointer_down(10, 10, 1).unwrap();
    for c in "WWW".chars() {
        composer.on_key_press(Key::Char(c)).unwrap();
    }
    composer.on_key_press(Key::Return).unwrap();

    let metrics = PangoMetrics::new().unwrap();
    let (mut surface, ctx) = surface_with_context(200, 80);
    composer.render(&ctx, &photo, &metrics);
    drop(ctx);

    let inked = (0..200)
        .flat_map(|x| (0..80).map(move |y| (x, y)))
        .filter(|&(x, y)| pixel(&mut surface, x, y) != (255, 255, 255))
        .count();
    assert!(inked > 0, "text should leave non-white pixels");
}
