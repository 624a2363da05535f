//! Rendering.
//!
//! The window is cleared to fully transparent every frame so only the pet
//! shows on the desktop. Sprites are drawn in [`ZIndex`] order, scaled by
//! their [`BlendShapes`] deformation around their pivot. Raw images and
//! sliders are drawn on top in window space, then the debug overlay.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::blendshape::{BlendShapeSlider, BlendShapes, MAX_WEIGHT};
use crate::components::boxcollider::BoxCollider;
use crate::components::pet::Pet;
use crate::components::position::Position;
use crate::components::rawimage::RawImage;
use crate::components::sequenceplayer::SequencePlayer;
use crate::components::sprite::Sprite;
use crate::components::uielement::UiElement;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::desktopmode::DesktopMode;
use crate::resources::texturestore::TextureStore;

const SLIDER_TRACK: Color = Color::new(40, 40, 40, 160);
const SLIDER_FILL: Color = Color::new(255, 120, 160, 220);

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: Res<TextureStore>,
    debug: Option<Res<DebugMode>>,
    desktop: Res<DesktopMode>,
    sprites: Query<(&Sprite, &Position, Option<&ZIndex>, Option<&BlendShapes>)>,
    images: Query<(&RawImage, &Position)>,
    sliders: Query<(&Position, &UiElement, &BlendShapeSlider)>,
    colliders: Query<(&BoxCollider, &Position)>,
    pets: Query<&SequencePlayer, With<Pet>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLANK);

    let mut to_draw: Vec<_> = sprites.iter().collect();
    to_draw.sort_by_key(|(_, _, z, _)| z.copied().unwrap_or_default());

    for (sprite, position, _, shapes) in to_draw {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let scale = shapes.map_or(Vector2::new(1.0, 1.0), BlendShapes::deformation);
        let mut src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
        if sprite.flip_h {
            src.width = -src.width;
        }
        let dest = Rectangle::new(
            position.pos.x,
            position.pos.y,
            sprite.width * scale.x,
            sprite.height * scale.y,
        );
        let origin = Vector2::new(sprite.origin.x * scale.x, sprite.origin.y * scale.y);
        d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
    }

    for (image, position) in images.iter() {
        let Some(tex) = image.texture.as_deref().and_then(|key| textures.get(key)) else {
            continue;
        };
        let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
        let dest = Rectangle::new(position.pos.x, position.pos.y, image.width, image.height);
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    for (position, element, slider) in sliders.iter() {
        let track = Rectangle::new(
            position.pos.x,
            position.pos.y,
            element.size.x,
            element.size.y,
        );
        let mut fill = track;
        fill.width *= slider.value() / MAX_WEIGHT;
        d.draw_rectangle_rec(track, SLIDER_TRACK);
        d.draw_rectangle_rec(fill, SLIDER_FILL);
    }

    if debug.is_some() {
        for (collider, position) in colliders.iter() {
            let (x, y, w, h) = collider.rect(position.pos);
            d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
        for (position, element, _) in sliders.iter() {
            d.draw_rectangle_lines(
                position.pos.x as i32,
                position.pos.y as i32,
                element.size.x as i32,
                element.size.y as i32,
                Color::YELLOW,
            );
        }

        let fps = d.get_fps();
        d.draw_text(
            &format!("DEBUG (F11) | FPS: {} | click-through: {}", fps, desktop.click_through()),
            4,
            4,
            10,
            Color::WHITE,
        );
        for (i, player) in pets.iter().enumerate() {
            let text = format!(
                "frame {}/{} {:?} {}",
                player.current_index() + 1,
                player.frame_count(),
                player.mode(),
                if player.is_playing() { "playing" } else { "paused" }
            );
            d.draw_text(&text, 4, 18 + 14 * i as i32, 10, Color::WHITE);
        }
    }
}
