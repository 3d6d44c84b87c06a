/// Vertex shader for the plant and garden bed
pub const PLANT_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec2 a_uv;
layout(location = 3) in vec3 a_color;
layout(location = 4) in float a_opacity;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;

out vec3 v_normal;
out vec3 v_world_position;
out vec2 v_uv;
out vec3 v_color;
out float v_opacity;

void main() {
    vec4 world_pos = u_model * vec4(a_position, 1.0);

    v_world_position = world_pos.xyz;
    v_normal = mat3(u_model) * a_normal;
    v_uv = a_uv;
    v_color = a_color;
    v_opacity = a_opacity;

    gl_Position = u_projection * u_view * world_pos;
}
"#;

/// Fragment shader: ambient + directional + spot + decaying point light,
/// with atmospheric fog toward the backdrop
pub const PLANT_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec3 v_normal;
in vec3 v_world_position;
in vec2 v_uv;
in vec3 v_color;
in float v_opacity;

uniform vec3 u_camera_pos;
uniform float u_time;

out vec4 fragColor;

void main() {
    vec3 normal = normalize(v_normal);
    // Translucent leaves are lit from both sides
    if (!gl_FrontFacing) {
        normal = -normal;
    }
    vec3 view_dir = normalize(u_camera_pos - v_world_position);

    // Ambient, soft gray
    vec3 ambient = vec3(0.753) * 0.5;

    // Key directional light
    vec3 key_dir = normalize(vec3(8.0, 12.0, 6.0));
    float key_ndotl = max(dot(normal, key_dir), 0.0);
    vec3 key = vec3(1.0) * 1.5 * key_ndotl;

    // Pale green spot from behind-left, aimed at the origin
    vec3 spot_pos = vec3(-6.0, 8.0, -4.0);
    vec3 spot_aim = normalize(-spot_pos);
    vec3 to_frag = normalize(v_world_position - spot_pos);
    float spot_cos = dot(to_frag, spot_aim);
    float cone = smoothstep(cos(0.785398), cos(0.785398 * 0.3), spot_cos);
    vec3 spot_dir = normalize(spot_pos - v_world_position);
    vec3 spot = vec3(0.91, 0.96, 0.91) * 0.6 * cone * max(dot(normal, spot_dir), 0.0);

    // Warm accent point light with distance decay
    vec3 point_pos = vec3(3.0, 2.0, 3.0);
    vec3 point_vec = point_pos - v_world_position;
    float point_dist = length(point_vec);
    float decay = clamp(1.0 - point_dist / 5.0, 0.0, 1.0);
    decay *= decay;
    vec3 point = vec3(1.0, 0.8, 0.008) * 0.2 * decay * max(dot(normal, normalize(point_vec)), 0.0);

    // Subtle specular from the key light only
    vec3 half_dir = normalize(key_dir + view_dir);
    float spec = pow(max(dot(normal, half_dir), 0.0), 24.0);
    vec3 specular = vec3(1.0) * spec * 0.08;

    vec3 final_color = v_color * (ambient + key + spot + point) + specular;

    // Linear fog toward the botanical backdrop
    float dist = length(v_world_position - u_camera_pos);
    float fog = clamp((dist - 8.0) / (15.0 - 8.0), 0.0, 1.0);
    vec3 fog_color = vec3(0.658, 0.835, 0.729);
    final_color = mix(final_color, fog_color, fog);

    // Tone mapping
    final_color = final_color / (final_color + vec3(1.0));

    // Gamma correction
    final_color = pow(final_color, vec3(1.0 / 2.2));

    fragColor = vec4(final_color, v_opacity);
}
"#;

/// Vertex shader for the star field backdrop
pub const STAR_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in float a_size;
layout(location = 2) in float a_alpha;
layout(location = 3) in vec3 a_color;

uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_time;

out float v_alpha;
out vec3 v_color;

void main() {
    // Gentle twinkle
    float twinkle = sin(u_time * 2.0 + a_position.x * 10.0 + a_position.y * 7.0) * 0.25 + 0.75;
    v_alpha = a_alpha * twinkle;
    v_color = a_color;

    vec4 view_pos = u_view * vec4(a_position, 1.0);
    gl_Position = u_projection * view_pos;
    gl_PointSize = a_size * (100.0 / -view_pos.z);
}
"#;

/// Fragment shader for the star field backdrop
pub const STAR_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in float v_alpha;
in vec3 v_color;

out vec4 fragColor;

void main() {
    // Circular soft point
    vec2 coord = gl_PointCoord - vec2(0.5);
    float dist = length(coord);

    if (dist > 0.5) {
        discard;
    }

    float alpha = v_alpha * (1.0 - dist * 2.0);
    alpha = alpha * alpha;

    fragColor = vec4(v_color, alpha);
}
"#;
