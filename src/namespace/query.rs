//! The query catalog (`q.`), shared by the context namespace (`c.`).

use std::marker::PhantomData;

use super::{Handle, Namespace};
use crate::catalog::{self, Builtin};
use crate::expr::{Rgba, Trs, Vec3};
use crate::value::Molang;

/// Handle for `q.`
#[derive(Debug, Clone, Copy)]
pub struct QueryHandle;

impl Handle for QueryHandle {
    const PREFIX: &'static str = "q";
}

/// An entity-scoped namespace over the query catalog. Use the [`Query`] and
/// [`Context`] aliases.
#[derive(Debug, Clone, Copy)]
pub struct Scope<H>(PhantomData<H>);

/// `q.` built-ins.
///
/// ```
/// use molang_builder::Query;
///
/// assert_eq!(Query::is_baby().to_string(), "q.is_baby");
/// assert_eq!(Query::has_tag("poison").to_string(), "q.has_tag('poison')");
/// assert_eq!(Query::position(1).to_string(), "q.position(1)");
/// ```
pub type Query = Scope<QueryHandle>;

/// `c.` built-ins: the query catalog under the context handle, plus
/// context-only members such as `owning_entity`.
pub type Context = Scope<super::ContextHandle>;

impl<H: Handle> Namespace for Scope<H> {
    const HANDLE: &'static str = H::PREFIX;

    fn builtins() -> &'static [Builtin] {
        Self::BUILTINS
    }

    fn builtin(name: &str) -> Option<&'static Builtin> {
        catalog::find(Self::BUILTINS, name).or_else(|| catalog::find(H::EXTRA, name))
    }
}

impl<H: Handle> Scope<H> {
    builtins! {
        table = BUILTINS;
        handle = H::PREFIX;

        // Entity state flags
        is_admiring = "is_admiring" () -> Molang;
        is_alive = "is_alive" () -> Molang;
        is_angry = "is_angry" () -> Molang;
        is_attached_to_entity = "is_attached_to_entity" () -> Molang;
        is_avoiding_block = "is_avoiding_block" () -> Molang;
        is_avoiding_mobs = "is_avoiding_mobs" () -> Molang;
        is_baby = "is_baby" () -> Molang;
        is_breathing = "is_breathing" () -> Molang;
        is_bribed = "is_bribed" () -> Molang;
        is_carrying_block = "is_carrying_block" () -> Molang;
        is_casting = "is_casting" () -> Molang;
        is_celebrating = "is_celebrating" () -> Molang;
        is_celebrating_special = "is_celebrating_special" () -> Molang;
        is_charged = "is_charged" () -> Molang;
        is_charging = "is_charging" () -> Molang;
        is_chested = "is_chested" () -> Molang;
        is_critical = "is_critical" () -> Molang;
        is_croaking = "is_croaking" () -> Molang;
        is_dancing = "is_dancing" () -> Molang;
        is_delayed_attacking = "is_delayed_attacking" () -> Molang;
        is_digging = "is_digging" () -> Molang;
        is_eating = "is_eating" () -> Molang;
        is_eating_mob = "is_eating_mob" () -> Molang;
        is_elder = "is_elder" () -> Molang;
        is_emerging = "is_emerging" () -> Molang;
        is_emoting = "is_emoting" () -> Molang;
        is_enchanted = "is_enchanted" () -> Molang;
        is_fire_immune = "is_fire_immune" () -> Molang;
        is_first_person = "is_first_person" () -> Molang;
        is_ghost = "is_ghost" () -> Molang;
        is_gliding = "is_gliding" () -> Molang;
        is_grazing = "is_grazing" () -> Molang;
        is_idling = "is_idling" () -> Molang;
        is_ignited = "is_ignited" () -> Molang;
        is_illager_captain = "is_illager_captain" () -> Molang;
        is_in_contact_with_water = "is_in_contact_with_water" () -> Molang;
        is_in_lava = "is_in_lava" () -> Molang;
        is_in_love = "is_in_love" () -> Molang;
        is_in_ui = "is_in_ui" () -> Molang;
        is_in_water = "is_in_water" () -> Molang;
        is_in_water_or_rain = "is_in_water_or_rain" () -> Molang;
        is_interested = "is_interested" () -> Molang;
        is_invisible = "is_invisible" () -> Molang;
        is_jump_goal_jumping = "is_jump_goal_jumping" () -> Molang;
        is_jumping = "is_jumping" () -> Molang;
        is_laying_down = "is_laying_down" () -> Molang;
        is_laying_egg = "is_laying_egg" () -> Molang;
        is_leashed = "is_leashed" () -> Molang;
        is_levitating = "is_levitating" () -> Molang;
        is_lingering = "is_lingering" () -> Molang;
        is_local_player = "is_local_player" () -> Molang;
        is_moving = "is_moving" () -> Molang;
        is_on_fire = "is_on_fire" () -> Molang;
        is_on_ground = "is_on_ground" () -> Molang;
        is_on_screen = "is_on_screen" () -> Molang;
        is_orphaned = "is_orphaned" () -> Molang;
        is_persona_or_premium_skin = "is_persona_or_premium_skin" () -> Molang;
        is_playing_dead = "is_playing_dead" () -> Molang;
        is_powered = "is_powered" () -> Molang;
        is_pregnant = "is_pregnant" () -> Molang;
        is_ram_attacking = "is_ram_attacking" () -> Molang;
        is_resting = "is_resting" () -> Molang;
        is_riding = "is_riding" () -> Molang;
        is_roaring = "is_roaring" () -> Molang;
        is_rolling = "is_rolling" () -> Molang;
        is_saddled = "is_saddled" () -> Molang;
        is_scared = "is_scared" () -> Molang;
        is_selected_item = "is_selected_item" () -> Molang;
        is_shaking = "is_shaking" () -> Molang;
        is_shaking_wetness = "is_shaking_wetness" () -> Molang;
        is_sheared = "is_sheared" () -> Molang;
        is_shield_powered = "is_shield_powered" () -> Molang;
        is_silent = "is_silent" () -> Molang;
        is_sitting = "is_sitting" () -> Molang;
        is_sleeping = "is_sleeping" () -> Molang;
        is_sneaking = "is_sneaking" () -> Molang;
        is_sneezing = "is_sneezing" () -> Molang;
        is_sniffing = "is_sniffing" () -> Molang;
        is_sonic_boom = "is_sonic_boom" () -> Molang;
        is_spectator = "is_spectator" () -> Molang;
        is_sprinting = "is_sprinting" () -> Molang;
        is_stackable = "is_stackable" () -> Molang;
        is_stalking = "is_stalking" () -> Molang;
        is_standing = "is_standing" () -> Molang;
        is_stunned = "is_stunned" () -> Molang;
        is_swimming = "is_swimming" () -> Molang;
        is_tamed = "is_tamed" () -> Molang;
        is_transforming = "is_transforming" () -> Molang;
        is_using_item = "is_using_item" () -> Molang;
        is_wall_climbing = "is_wall_climbing" () -> Molang;
        blocking = "blocking" () -> Molang;
        can_climb = "can_climb" () -> Molang;
        can_damage_nearby_mobs = "can_damage_nearby_mobs" () -> Molang;
        can_dash = "can_dash" () -> Molang;
        can_fly = "can_fly" () -> Molang;
        can_power_jump = "can_power_jump" () -> Molang;
        can_swim = "can_swim" () -> Molang;
        can_walk = "can_walk" () -> Molang;
        has_cape = "has_cape" () -> Molang;
        has_collision = "has_collision" () -> Molang;
        has_dash_cooldown = "has_dash_cooldown" () -> Molang;
        has_gravity = "has_gravity" () -> Molang;
        has_head_gear = "has_head_gear" () -> Molang;
        has_owner = "has_owner" () -> Molang;
        has_player_rider = "has_player_rider" () -> Molang;
        has_rider = "has_rider" () -> Molang;
        has_target = "has_target" () -> Molang;
        last_hit_by_player = "last_hit_by_player" () -> Molang;
        out_of_control = "out_of_control" () -> Molang;
        show_bottom = "show_bottom" () -> Molang;
        any_animation_finished = "any_animation_finished" () -> Molang;
        all_animations_finished = "all_animations_finished" () -> Molang;

        // Entity numeric state
        anim_time = "anim_time" () -> Molang;
        body_x_rotation = "body_x_rotation" () -> Molang;
        body_y_rotation = "body_y_rotation" () -> Molang;
        cape_flap_amount = "cape_flap_amount" () -> Molang;
        current_squish_value = "current_squish_value" () -> Molang;
        dash_cooldown_progress = "dash_cooldown_progress" () -> Molang;
        death_ticks = "death_ticks" () -> Molang;
        distance_from_camera = "distance_from_camera" () -> Molang;
        equipment_count = "equipment_count" () -> Molang;
        eye_target_x_rotation = "eye_target_x_rotation" () -> Molang;
        eye_target_y_rotation = "eye_target_y_rotation" () -> Molang;
        facing_target_to_range_attack = "facing_target_to_range_attack" () -> Molang;
        ground_speed = "ground_speed" () -> Molang;
        head_roll_angle = "head_roll_angle" () -> Molang;
        health = "health" () -> Molang;
        heartbeat_interval = "heartbeat_interval" () -> Molang;
        heartbeat_phase = "heartbeat_phase" () -> Molang;
        hurt_direction = "hurt_direction" () -> Molang;
        hurt_time = "hurt_time" () -> Molang;
        invulnerable_ticks = "invulnerable_ticks" () -> Molang;
        key_frame_lerp_time = "key_frame_lerp_time" () -> Molang;
        lie_amount = "lie_amount" () -> Molang;
        life_span = "life_span" () -> Molang;
        life_time = "life_time" () -> Molang;
        mark_variant = "mark_variant" () -> Molang;
        max_health = "max_health" () -> Molang;
        model_scale = "model_scale" () -> Molang;
        modified_distance_moved = "modified_distance_moved" () -> Molang;
        modified_move_speed = "modified_move_speed" () -> Molang;
        modified_swing_duration = "modified_swing_duration" () -> Molang;
        on_fire_time = "on_fire_time" () -> Molang;
        player_level = "player_level" () -> Molang;
        previous_squish_value = "previous_squish_value" () -> Molang;
        roll_counter = "roll_counter" () -> Molang;
        shake_angle = "shake_angle" () -> Molang;
        shake_time = "shake_time" () -> Molang;
        shield_blocking_bob = "shield_blocking_bob" () -> Molang;
        sit_amount = "sit_amount" () -> Molang;
        skin_id = "skin_id" () -> Molang;
        sleep_rotation = "sleep_rotation" () -> Molang;
        sneeze_counter = "sneeze_counter" () -> Molang;
        standing_scale = "standing_scale" () -> Molang;
        structural_integrity = "structural_integrity" () -> Molang;
        swell_amount = "swell_amount" () -> Molang;
        swelling_dir = "swelling_dir" () -> Molang;
        swim_amount = "swim_amount" () -> Molang;
        tail_angle = "tail_angle" () -> Molang;
        target_x_rotation = "target_x_rotation" () -> Molang;
        target_y_rotation = "target_y_rotation" () -> Molang;
        trade_tier = "trade_tier" () -> Molang;
        max_trade_tier = "max_trade_tier" () -> Molang;
        unhappy_counter = "unhappy_counter" () -> Molang;
        variant = "variant" () -> Molang;
        vertical_speed = "vertical_speed" () -> Molang;
        walk_distance = "walk_distance" () -> Molang;
        wing_flap_position = "wing_flap_position" () -> Molang;
        wing_flap_speed = "wing_flap_speed" () -> Molang;
        yaw_speed = "yaw_speed" () -> Molang;
        get_actor_info_id = "get_actor_info_id" () -> Molang;
        get_name = "get_name" () -> Molang;
        get_animation_frame = "get_animation_frame" () -> Molang;
        texture_frame_index = "texture_frame_index" () -> Molang;
        /// Identifier of the entity that owns this one, e.g. `'minecraft:player'`
        owner_identifier = "owner_identifier" () -> Molang;

        // Riding
        ride_body_x_rotation = "ride_body_x_rotation" () -> Molang;
        ride_body_y_rotation = "ride_body_y_rotation" () -> Molang;
        ride_head_x_rotation = "ride_head_x_rotation" () -> Molang;
        ride_head_y_rotation = "ride_head_y_rotation" () -> Molang;
        rider_body_x_rotation = "rider_body_x_rotation" ([rider_index]) -> Molang;
        rider_body_y_rotation = "rider_body_y_rotation" ([rider_index]) -> Molang;
        rider_head_x_rotation = "rider_head_x_rotation" ([rider_index]) -> Molang;
        rider_head_y_rotation = "rider_head_y_rotation" ([rider_index]) -> Molang;

        // Items and equipment
        item_in_use_duration = "item_in_use_duration" () -> Molang;
        item_max_use_duration = "item_max_use_duration" () -> Molang;
        item_remaining_use_duration = "item_remaining_use_duration" () -> Molang;
        main_hand_item_max_duration = "main_hand_item_max_duration" () -> Molang;
        main_hand_item_use_duration = "main_hand_item_use_duration" () -> Molang;
        max_durability = "max_durability" () -> Molang;
        remaining_durability = "remaining_durability" () -> Molang;
        armor_color_slot = "armor_color_slot" (slot, channel) -> Molang;
        armor_damage_slot = "armor_damage_slot" (slot) -> Molang;
        armor_material_slot = "armor_material_slot" (slot) -> Molang;
        armor_texture_slot = "armor_texture_slot" (slot) -> Molang;
        has_armor_slot = "has_armor_slot" (slot) -> Molang;
        /// Seconds left on the item's cooldown; slot defaults to the main hand.
        cooldown_time = "cooldown_time" ([slot]) -> Molang;
        cooldown_time_remaining = "cooldown_time_remaining" ([slot]) -> Molang;
        /// Whether the cooldown of the given category is active.
        is_cooldown_type = "is_cooldown_type" (category [slot]) -> Molang;
        equipped_item_all_tags = "equipped_item_all_tags" (slot; ..tags) -> Molang;
        equipped_item_any_tag = "equipped_item_any_tag" (slot; ..tags) -> Molang;
        equipped_item_is_attachable = "equipped_item_is_attachable" ([hand]) -> Molang;
        get_equipped_item_name = "get_equipped_item_name" ([hand, slot_index]) -> Molang;
        is_item_equipped = "is_item_equipped" ([hand]) -> Molang;
        is_item_name_any = "is_item_name_any" (slot, index; ..names) -> Molang;
        item_is_charged = "item_is_charged" ([hand]) -> Molang;
        item_slot_to_bone_name = "item_slot_to_bone_name" (slot) -> Molang;

        // Tags, families and properties
        /// True when the entity carries the given tag.
        has_tag = "has_tag" (tag) -> Molang;
        all_tags = "all_tags" (; ..tags) -> Molang;
        any_tag = "any_tag" (; ..tags) -> Molang;
        has_any_family = "has_any_family" (; ..families) -> Molang;
        had_component_group = "had_component_group" (group) -> Molang;
        has_biome_tag = "has_biome_tag" (tag) -> Molang;
        has_property = "has_property" (name) -> Molang;
        property = "property" (name) -> Molang;
        is_name_any = "is_name_any" (; ..names) -> Molang;
        is_owner_identifier_any = "is_owner_identifier_any" (; ..identifiers) -> Molang;
        scoreboard = "scoreboard" (objective) -> Molang;

        // Blocks and world
        above_top_solid = "above_top_solid" (x, z) -> Molang;
        block_face = "block_face" () -> Molang;
        cardinal_block_face_placed_on = "cardinal_block_face_placed_on" () -> Molang;
        cardinal_facing = "cardinal_facing" () -> Molang;
        cardinal_facing_2d = "cardinal_facing_2d" () -> Molang;
        cardinal_player_facing = "cardinal_player_facing" () -> Molang;
        block_state = "block_state" (name) -> Molang;
        has_block_state = "has_block_state" (name) -> Molang;
        block_has_all_tags = "block_has_all_tags" (x, y, z; ..tags) -> Molang;
        block_has_any_tag = "block_has_any_tag" (x, y, z; ..tags) -> Molang;
        block_neighbor_has_all_tags = "block_neighbor_has_all_tags" (x, y, z; ..tags) -> Molang;
        block_neighbor_has_any_tag = "block_neighbor_has_any_tag" (x, y, z; ..tags) -> Molang;
        relative_block_has_all_tags = "relative_block_has_all_tags" (x, y, z; ..tags) -> Molang;
        relative_block_has_any_tag = "relative_block_has_any_tag" (x, y, z; ..tags) -> Molang;
        heightmap = "heightmap" (x, z) -> Molang;
        day = "day" () -> Molang;
        moon_brightness = "moon_brightness" () -> Molang;
        moon_phase = "moon_phase" () -> Molang;
        time_of_day = "time_of_day" () -> Molang;
        time_stamp = "time_stamp" () -> Molang;
        noise = "noise" (x, y) -> Molang;
        /// Light level at the entity; `level` is compared on a 0 to 16 scale.
        light_level = "light_level" ([level]) clamp { 0 => LIGHT_LEVEL } -> Molang;

        // Position and motion
        /// World position along `axis` (0 = x, 1 = y, 2 = z).
        position = "position" ([axis]) clamp { 0 => AXIS } -> Molang;
        position_delta = "position_delta" (axis) clamp { 0 => AXIS } -> Molang;
        movement_direction = "movement_direction" (axis) clamp { 0 => AXIS } -> Molang;
        head_x_rotation = "head_x_rotation" (head_index) -> Molang;
        head_y_rotation = "head_y_rotation" (head_index) -> Molang;
        get_locator_offset = "get_locator_offset" (locator, axis) clamp { 1 => AXIS } -> Molang;
        get_root_locator_offset = "get_root_locator_offset" (locator, axis) clamp { 1 => AXIS } -> Molang;
        get_default_bone_pivot = "get_default_bone_pivot" (bone, axis) clamp { 1 => AXIS } -> Molang;

        // Bones
        /// Current rotation of a bone, in degrees.
        bone_rotation = "bone_rotation" (bone) -> Vec3;
        bone_origin = "bone_origin" (bone) -> Vec3;
        bone_aabb = "bone_aabb" (bone) -> Molang;
        /// Translation, rotation and scale of a bone as one struct.
        bone_orientation_trs = "bone_orientation_trs" (bone) -> Trs;

        // Camera and client
        camera_distance_range_lerp = "camera_distance_range_lerp" (near, far) -> Molang;
        camera_rotation = "camera_rotation" (axis) clamp { 0 => CAMERA_AXIS } -> Molang;
        rotation_to_camera = "rotation_to_camera" (axis) clamp { 0 => CAMERA_AXIS } -> Molang;
        client_max_render_distance = "client_max_render_distance" () -> Molang;
        client_memory_tier = "client_memory_tier" () -> Molang;
        server_memory_tier = "server_memory_tier" () -> Molang;
        graphics_mode_is_any = "graphics_mode_is_any" (; ..modes) -> Molang;
        /// Picks a level of detail index from camera distance thresholds.
        lod_index = "lod_index" (; ..distances) -> Molang;
        frame_alpha = "frame_alpha" () -> Molang;
        delta_time = "delta_time" () -> Molang;
        // Frame timing, looking back up to 30 frames
        average_frame_time = "average_frame_time" ([frames]) clamp { 0 => FRAME_LOOKBACK } -> Molang;
        last_frame_time = "last_frame_time" ([frames]) clamp { 0 => FRAME_LOOKBACK } -> Molang;
        maximum_frame_time = "maximum_frame_time" ([frames]) clamp { 0 => FRAME_LOOKBACK } -> Molang;
        minimum_frame_time = "minimum_frame_time" ([frames]) clamp { 0 => FRAME_LOOKBACK } -> Molang;

        // Particles and effects
        /// Potion particle color of the entity.
        spellcolor = "spellcolor" () -> Rgba;
        surface_particle_color = "surface_particle_color" () -> Rgba;
        surface_particle_texture_coordinate = "surface_particle_texture_coordinate" () -> Molang;
        surface_particle_texture_size = "surface_particle_texture_size" () -> Molang;
        effect_emitter_count = "effect_emitter_count" () -> Molang;
        effect_particle_count = "effect_particle_count" () -> Molang;
        total_emitter_count = "total_emitter_count" () -> Molang;
        total_particle_count = "total_particle_count" () -> Molang;
        actor_count = "actor_count" () -> Molang;

        // Utility
        all = "all" (value; ..candidates) -> Molang;
        any = "any" (value; ..candidates) -> Molang;
        approx_eq = "approx_eq" (; ..values) -> Molang;
        count = "count" (; ..values) -> Molang;
        in_range = "in_range" (value, min, max) -> Molang;
        debug_output = "debug_output" (; ..values) -> Molang;
        log = "log" (; ..values) -> Molang;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arg, Slot};

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Query::BUILTINS.iter().map(|b| b.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn bounds_fit_arity() {
        for b in Query::BUILTINS {
            for rule in b.bounds {
                assert!(
                    b.max_args().is_none_or(|max| rule.index < max),
                    "{} bound index {} out of range",
                    b.name,
                    rule.index
                );
            }
        }
    }

    #[test]
    fn variadic_tail_renders_each_item() {
        let m = Query::all_tags(["hostile", "undead"]);
        assert_eq!(m.as_str(), "q.all_tags('hostile', 'undead')");
        let m = Query::is_item_name_any(Slot::MainHand, 0, ["minecraft:stick"]);
        assert_eq!(
            m.as_str(),
            "q.is_item_name_any('slot.weapon.mainhand', 0, 'minecraft:stick')"
        );
    }

    #[test]
    fn optional_parameters_drop_when_omitted() {
        assert_eq!(Query::cooldown_time(Arg::Omitted).as_str(), "q.cooldown_time");
        assert_eq!(Query::cooldown_time(1).as_str(), "q.cooldown_time(1)");
        assert_eq!(
            Query::get_equipped_item_name("main_hand", None::<i32>).as_str(),
            "q.get_equipped_item_name('main_hand')"
        );
    }

    #[test]
    fn axis_arguments_clamp() {
        assert_eq!(Query::position_delta(-4).as_str(), "q.position_delta(0)");
        assert_eq!(Query::camera_rotation(2).as_str(), "q.camera_rotation(1)");
        assert_eq!(
            Query::get_locator_offset("lead", 9).as_str(),
            "q.get_locator_offset('lead', 2)"
        );
    }

    #[test]
    fn light_level_clamps_to_sixteen() {
        assert_eq!(Query::light_level(20).as_str(), "q.light_level(16)");
        assert_eq!(Query::light_level(-1).as_str(), "q.light_level(0)");
        assert_eq!(Query::light_level(None::<i32>).as_str(), "q.light_level");
    }

    #[test]
    fn context_shares_the_catalog() {
        assert_eq!(Context::is_baby().as_str(), "c.is_baby");
        assert_eq!(Context::builtins().len(), Query::builtins().len());
    }
}
