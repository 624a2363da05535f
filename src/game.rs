//! Pet scene setup.
//!
//! [`setup`] runs once after the window exists: it loads every texture the
//! manifest mentions, builds the [`ClipLibrary`] and spawns the scene through
//! [`spawn_pet_scene`], which needs no window and is what the tests use.
//!
//! The scene is:
//! - the pet: sprite + sequence player + hitbox + blend shapes
//! - an optional badge playing into a raw image in window space
//! - an optional slider along the bottom edge driving one blend shape
//! - the pool prototypes, registered in [`PrototypeRegistry`]

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::blendshape::{BlendShapeSlider, BlendShapes};
use crate::components::boxcollider::BoxCollider;
use crate::components::interactable::Interactable;
use crate::components::pet::Pet;
use crate::components::position::Position;
use crate::components::pushself::PushSelf;
use crate::components::rawimage::RawImage;
use crate::components::sequenceplayer::SequencePlayer;
use crate::components::sprite::Sprite;
use crate::components::uielement::UiElement;
use crate::components::zindex::ZIndex;
use crate::resources::cliplibrary::ClipLibrary;
use crate::resources::objectpool::{Prototype, PrototypeRegistry};
use crate::resources::petconfig::PetConfig;
use crate::resources::petmanifest::PetManifest;
use crate::resources::texturestore::TextureStore;

/// Slider thickness and distance to the window edges, in pixels.
const SLIDER_HEIGHT: f32 = 12.0;
const SLIDER_MARGIN: f32 = 16.0;

/// Draw order of pooled spawns, above the pet.
const SPAWN_Z: i32 = 1;

/// Entities spawned by [`spawn_pet_scene`].
#[derive(Resource, Debug, Clone, Copy)]
pub struct PetScene {
    pub pet: Entity,
    pub badge: Option<Entity>,
    pub slider: Option<Entity>,
}

pub fn setup(
    mut commands: Commands,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    manifest: Res<PetManifest>,
    config: Res<PetConfig>,
) {
    let mut textures = TextureStore::new();
    textures.load_all(&mut rl, &th, manifest.texture_paths());

    let library = ClipLibrary::from_manifest(&manifest, |path| textures.size(path));
    let scene = spawn_pet_scene(&mut commands, &manifest, &library, &config);

    commands.insert_resource(textures);
    commands.insert_resource(library);
    commands.insert_resource(scene);
    info!("Pet scene ready");
}

/// A sprite already showing the player's current frame, pivoted at the feet.
fn sprite_for(player: &SequencePlayer) -> Sprite {
    player
        .current_frame()
        .map(|f| Sprite::new(f.tex_key.clone(), f.width, f.height).with_feet_origin())
        .unwrap_or_else(Sprite::blank)
}

fn clip_or_empty(library: &ClipLibrary, name: &str) -> SequencePlayer {
    library.player(name).unwrap_or_else(|| {
        warn!("Clip '{}' not found, using an empty sequence", name);
        SequencePlayer::new(Vec::new())
    })
}

/// Spawn the pet, its badge, its slider and register the pool prototypes.
pub fn spawn_pet_scene(
    commands: &mut Commands,
    manifest: &PetManifest,
    library: &ClipLibrary,
    config: &PetConfig,
) -> PetScene {
    let def = &manifest.pet;

    let idle = clip_or_empty(library, &def.idle_clip);
    let sprite = sprite_for(&idle);
    let (hit_w, hit_h) = def.hitbox;

    let mut pet = Pet::new(def.idle_clip.clone());
    if let Some(clip) = &def.poke_clip {
        pet = pet.with_poke_clip(clip.clone());
    }
    if let Some(prototype) = &def.poke_spawn {
        pet = pet.with_poke_spawn(prototype.clone());
    }

    let pet = commands
        .spawn((
            pet,
            Position::new(def.position.0, def.position.1),
            ZIndex(0),
            sprite,
            idle,
            BoxCollider::new(hit_w, hit_h).with_offset(Vector2::new(-hit_w * 0.5, -hit_h)),
            Interactable::new(config.interaction_layer),
            BlendShapes::new(def.blend_shapes.clone()),
        ))
        .id();

    let badge = manifest.badge.as_ref().map(|badge| {
        commands
            .spawn((
                Position::new(badge.position.0, badge.position.1),
                RawImage::default(),
                clip_or_empty(library, &badge.clip),
            ))
            .id()
    });

    let slider = def.slider_shape.as_ref().map(|shape| {
        let (w, h) = config.window_size();
        commands
            .spawn((
                Position::new(SLIDER_MARGIN, h as f32 - SLIDER_MARGIN - SLIDER_HEIGHT),
                UiElement::new(w as f32 - 2.0 * SLIDER_MARGIN, SLIDER_HEIGHT),
                BlendShapeSlider::new(pet, shape.clone()),
            ))
            .id()
    });

    let mut registry = PrototypeRegistry::default();
    for proto in &manifest.prototypes {
        let player = clip_or_empty(library, &proto.clip);
        let sprite = sprite_for(&player);
        let lifetime = proto.lifetime;
        registry.register(Prototype::new(&proto.name, move |entity| {
            entity.insert((
                Position::default(),
                ZIndex(SPAWN_Z),
                sprite.clone(),
                player.clone(),
                PushSelf::new(lifetime),
            ));
        }));
    }
    commands.insert_resource(registry);

    PetScene { pet, badge, slider }
}
