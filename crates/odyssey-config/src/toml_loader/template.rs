//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Odyssey Explorer Configuration
# Schema version {schema_version}
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Odyssey Explorer"
# width = 1280            # 320-7680
# height = 800            # 240-4320
# startup_mode = "windowed"   # windowed, maximized, fullscreen
# vsync = true

[camera]
# fov = 75.0              # 10-150 degrees
# near = 0.1
# far = 10000.0
# position = [15.0, 20.0, 2.0]
# min_distance = 1.0
# max_distance = 15.0
# auto_rotate = true
# auto_rotate_speed = 0.3
# enable_rotate = false
# enable_zoom = false

[scene]
# asset_dir = "."
# textures = [
#     "images/baseAtmos.png",
#     "images/temptations.png",
#     "images/showTime.png",
#     "images/honey01.png",
#     "images/iceland01.png",
# ]
# skybox = "images/BasicSkyboxHD.png"   # empty string disables the skybox
# clear_color = "#222222"
# ambient_color = "#404040"
# ambient_intensity = 5.0   # 0.0-20.0
# sphere_segments = 16      # 3-128

[galaxy]
# count = 100000            # 100-1000000
# size = 0.001              # 0.001-0.1
# radius = 20.0             # 1-500
# branches = 3              # 2-10
# spin = 1.3                # -3.0-3.0
# randomness = 0.2          # 0.0-2.0
# randomness_power = 6.0    # 1.0-10.0
# y_height = 5.0            # 1-150
# color = "#ff5588"
# opacity = 0.5             # 0.0-1.0

[universe]
# odyssey_count = 20        # 0-10000
# first_ring_radius = 7.0
# ring_spacing = 5.0
# first_ring_capacity = 10  # 1-1000
# ring_growth = 1.5         # 1.0-4.0
# spawn_mode = "horizontal" # horizontal, scattered
# max_vertical_spawn_height = 10.0
# show_center = true

[universe.connections]
# max_line_height = 8.0
# segments = 20             # 1-256
# color = "#ffffff"
# opacity = 0.15            # 0.0-1.0

[logging]
# level = "info"            # trace, debug, info, warn, error

[debug]
# show_panel = false        # toggle at runtime with H
# seed = 42
"##
    .replace("{schema_version}", &CONFIG_SCHEMA_VERSION.to_string())
}
