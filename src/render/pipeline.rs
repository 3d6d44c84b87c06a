use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::math::{Mat4, Vec3};
use crate::mesh::Mesh;
use super::shaders::*;
use super::webgl::WebGLContext;

/// Cached uniform locations for the plant shader
struct PlantUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    camera_pos: Option<WebGlUniformLocation>,
}

/// Cached uniform locations for the star shader
struct StarUniforms {
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
}

/// Forward pipeline: one pass for the plant mesh, one for the star field
pub struct RenderPipeline {
    ctx: WebGLContext,

    plant_program: WebGlProgram,
    star_program: WebGlProgram,

    plant_uniforms: PlantUniforms,
    star_uniforms: StarUniforms,

    plant_vao: Option<WebGlVertexArrayObject>,
    plant_vertex_buffer: Option<WebGlBuffer>,
    plant_index_buffer: Option<WebGlBuffer>,
    plant_index_count: i32,

    // Garden bed, rendered without the sway transform
    stage_vao: Option<WebGlVertexArrayObject>,
    stage_vertex_buffer: Option<WebGlBuffer>,
    stage_index_buffer: Option<WebGlBuffer>,
    stage_index_count: i32,

    star_vao: Option<WebGlVertexArrayObject>,
    star_buffer: Option<WebGlBuffer>,
    star_count: i32,

    width: i32,
    height: i32,

    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub fov: f32,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);

        let plant_program = ctx.create_program(PLANT_VERTEX_SHADER, PLANT_FRAGMENT_SHADER)?;
        let star_program = ctx.create_program(STAR_VERTEX_SHADER, STAR_FRAGMENT_SHADER)?;

        let plant_uniforms = PlantUniforms {
            model: ctx.get_uniform_location(&plant_program, "u_model"),
            view: ctx.get_uniform_location(&plant_program, "u_view"),
            projection: ctx.get_uniform_location(&plant_program, "u_projection"),
            time: ctx.get_uniform_location(&plant_program, "u_time"),
            camera_pos: ctx.get_uniform_location(&plant_program, "u_camera_pos"),
        };

        let star_uniforms = StarUniforms {
            view: ctx.get_uniform_location(&star_program, "u_view"),
            projection: ctx.get_uniform_location(&star_program, "u_projection"),
            time: ctx.get_uniform_location(&star_program, "u_time"),
        };

        Ok(Self {
            ctx,
            plant_program,
            star_program,
            plant_uniforms,
            star_uniforms,
            plant_vao: None,
            plant_vertex_buffer: None,
            plant_index_buffer: None,
            plant_index_count: 0,
            stage_vao: None,
            stage_vertex_buffer: None,
            stage_index_buffer: None,
            stage_index_count: 0,
            star_vao: None,
            star_buffer: None,
            star_count: 0,
            width,
            height,
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            camera_target: Vec3::ZERO,
            fov: std::f32::consts::FRAC_PI_4,
        })
    }

    /// Upload the assembled plant mesh to the GPU
    pub fn upload_plant_mesh(&mut self, mesh: &Mesh) -> Result<(), String> {
        let (vao, vertex_buffer, index_buffer, index_count) = self.upload_surface_mesh(mesh)?;
        self.plant_vao = Some(vao);
        self.plant_vertex_buffer = Some(vertex_buffer);
        self.plant_index_buffer = Some(index_buffer);
        self.plant_index_count = index_count;
        Ok(())
    }

    /// Upload the static garden bed mesh
    pub fn upload_stage_mesh(&mut self, mesh: &Mesh) -> Result<(), String> {
        let (vao, vertex_buffer, index_buffer, index_count) = self.upload_surface_mesh(mesh)?;
        self.stage_vao = Some(vao);
        self.stage_vertex_buffer = Some(vertex_buffer);
        self.stage_index_buffer = Some(index_buffer);
        self.stage_index_count = index_count;
        Ok(())
    }

    fn upload_surface_mesh(
        &self,
        mesh: &Mesh,
    ) -> Result<(WebGlVertexArrayObject, WebGlBuffer, WebGlBuffer, i32), String> {
        let gl = &self.ctx.gl;

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        let vertex_data = mesh.vertex_data();
        let vertex_buffer = self.ctx.create_buffer_f32(&vertex_data, WebGl2RenderingContext::STATIC_DRAW)?;

        let index_data = mesh.index_data();
        let index_buffer = self.ctx.create_index_buffer(index_data, WebGl2RenderingContext::STATIC_DRAW)?;

        // Layout: position(3) + normal(3) + uv(2) + color(3) + opacity(1) = 12 floats
        let stride = 12 * 4;

        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));
        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));

        // Position (location 0)
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, WebGl2RenderingContext::FLOAT, false, stride, 0);

        // Normal (location 1)
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 3, WebGl2RenderingContext::FLOAT, false, stride, 12);

        // UV (location 2)
        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_pointer_with_i32(2, 2, WebGl2RenderingContext::FLOAT, false, stride, 24);

        // Color (location 3)
        gl.enable_vertex_attrib_array(3);
        gl.vertex_attrib_pointer_with_i32(3, 3, WebGl2RenderingContext::FLOAT, false, stride, 32);

        // Opacity (location 4)
        gl.enable_vertex_attrib_array(4);
        gl.vertex_attrib_pointer_with_i32(4, 1, WebGl2RenderingContext::FLOAT, false, stride, 44);

        gl.bind_vertex_array(None);

        Ok((vao, vertex_buffer, index_buffer, index_data.len() as i32))
    }

    /// Upload the static star field
    /// Format: position(3) + size(1) + alpha(1) + color(3) = 8 floats per star
    pub fn upload_stars(&mut self, data: &[f32]) -> Result<(), String> {
        let gl = &self.ctx.gl;

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        let buffer = self.ctx.create_buffer_f32(data, WebGl2RenderingContext::STATIC_DRAW)?;

        let stride = 8 * 4;
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&buffer));

        // Position
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, WebGl2RenderingContext::FLOAT, false, stride, 0);

        // Size
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 1, WebGl2RenderingContext::FLOAT, false, stride, 12);

        // Alpha
        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_pointer_with_i32(2, 1, WebGl2RenderingContext::FLOAT, false, stride, 16);

        // Color
        gl.enable_vertex_attrib_array(3);
        gl.vertex_attrib_pointer_with_i32(3, 3, WebGl2RenderingContext::FLOAT, false, stride, 20);

        gl.bind_vertex_array(None);

        self.star_vao = Some(vao);
        self.star_buffer = Some(buffer);
        self.star_count = (data.len() / 8) as i32;

        Ok(())
    }

    /// Render a frame with the given plant model matrix
    pub fn render(&self, time: f32, model: &Mat4) {
        let gl = &self.ctx.gl;

        let aspect = self.width as f32 / self.height as f32;
        let projection = Mat4::perspective(self.fov, aspect, 0.1, 100.0);
        let view = Mat4::look_at(self.camera_position, self.camera_target, Vec3::UP);

        self.ctx.viewport(0, 0, self.width, self.height);
        // Clear to the fog color so distant geometry blends into the backdrop
        self.ctx.clear(0.658, 0.835, 0.729, 1.0);
        self.ctx.enable_depth_test();

        // Stars first, far behind the plant
        if self.star_vao.is_some() && self.star_count > 0 {
            gl.use_program(Some(&self.star_program));
            gl.depth_mask(false);
            self.ctx.enable_additive_blending();

            self.ctx.uniform_matrix4fv(self.star_uniforms.view.as_ref(), view.as_slice());
            self.ctx.uniform_matrix4fv(self.star_uniforms.projection.as_ref(), projection.as_slice());
            self.ctx.uniform_1f(self.star_uniforms.time.as_ref(), time);

            gl.bind_vertex_array(self.star_vao.as_ref());
            gl.draw_arrays(WebGl2RenderingContext::POINTS, 0, self.star_count);

            gl.depth_mask(true);
        }

        // Garden bed and plant share a program; only the model matrix differs
        gl.use_program(Some(&self.plant_program));
        self.ctx.enable_blending();

        self.ctx.uniform_matrix4fv(self.plant_uniforms.view.as_ref(), view.as_slice());
        self.ctx.uniform_matrix4fv(self.plant_uniforms.projection.as_ref(), projection.as_slice());
        self.ctx.uniform_1f(self.plant_uniforms.time.as_ref(), time);
        self.ctx.uniform_3f(
            self.plant_uniforms.camera_pos.as_ref(),
            self.camera_position.x,
            self.camera_position.y,
            self.camera_position.z,
        );

        // Garden bed stays put
        if self.stage_vao.is_some() && self.stage_index_count > 0 {
            self.ctx.uniform_matrix4fv(
                self.plant_uniforms.model.as_ref(),
                Mat4::identity().as_slice(),
            );
            gl.bind_vertex_array(self.stage_vao.as_ref());
            gl.draw_elements_with_i32(
                WebGl2RenderingContext::TRIANGLES,
                self.stage_index_count,
                WebGl2RenderingContext::UNSIGNED_INT,
                0,
            );
        }

        // Plant carries the sway transform
        if self.plant_vao.is_some() && self.plant_index_count > 0 {
            self.ctx.uniform_matrix4fv(self.plant_uniforms.model.as_ref(), model.as_slice());
            gl.bind_vertex_array(self.plant_vao.as_ref());
            gl.draw_elements_with_i32(
                WebGl2RenderingContext::TRIANGLES,
                self.plant_index_count,
                WebGl2RenderingContext::UNSIGNED_INT,
                0,
            );
        }
    }

    /// Resize the drawing surface
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}
