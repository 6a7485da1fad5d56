//! Shader and program commands
//!
//! Programs and shaders use create-style driver constructors rather than
//! gen-style, and most of their introspection is blocking: compile and link
//! results only exist after the render thread has executed the work.

use glrelay_common::{GlEnum, ObjectHandle, glenum};

use crate::context::GlContext;
use crate::error::{RegistryError, RelayError};

impl GlContext {
    pub fn create_program(&self) -> Result<ObjectHandle, RelayError> {
        let handle = self.registry.allocate();
        self.queue.enqueue("create_program", move |ctx| {
            let name = ctx.driver().create_program();
            ctx.registry().bind(handle, name);
        })?;
        Ok(handle)
    }

    /// Allocate a shader handle. Only vertex and fragment shaders exist on
    /// the drivers this bridge targets; anything else is an argument error
    /// reported before enqueueing.
    pub fn create_shader(&self, shader_type: GlEnum) -> Result<ObjectHandle, RelayError> {
        if shader_type != glenum::VERTEX_SHADER && shader_type != glenum::FRAGMENT_SHADER {
            return Err(RelayError::InvalidArgument {
                op: "create_shader",
                reason: format!("unknown shader type 0x{shader_type:04X}"),
            });
        }
        let handle = self.registry.allocate();
        self.queue.enqueue("create_shader", move |ctx| {
            let name = ctx.driver().create_shader(shader_type);
            ctx.registry().bind(handle, name);
        })?;
        Ok(handle)
    }

    pub fn delete_program(&self, program: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("delete_program", move |ctx| {
            if let Some(name) = ctx.registry().remove(program) {
                ctx.driver().delete_program(name);
            }
        })
    }

    pub fn delete_shader(&self, shader: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("delete_shader", move |ctx| {
            if let Some(name) = ctx.registry().remove(shader) {
                ctx.driver().delete_shader(name);
            }
        })
    }

    pub fn is_program(&self, program: ObjectHandle) -> Result<bool, RelayError> {
        self.queue.enqueue_blocking("is_program", move |ctx| {
            match ctx.registry().lookup(program) {
                Ok(name) => ctx.driver().is_program(name),
                Err(_) => false,
            }
        })
    }

    pub fn is_shader(&self, shader: ObjectHandle) -> Result<bool, RelayError> {
        self.queue.enqueue_blocking("is_shader", move |ctx| {
            match ctx.registry().lookup(shader) {
                Ok(name) => ctx.driver().is_shader(name),
                Err(_) => false,
            }
        })
    }

    pub fn attach_shader(
        &self,
        program: ObjectHandle,
        shader: ObjectHandle,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("attach_shader", move |ctx| {
            let Some(program) = ctx.resolve("attach_shader", program) else {
                return;
            };
            let Some(shader) = ctx.resolve("attach_shader", shader) else {
                return;
            };
            ctx.driver().attach_shader(program, shader);
        })
    }

    pub fn detach_shader(
        &self,
        program: ObjectHandle,
        shader: ObjectHandle,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("detach_shader", move |ctx| {
            let Some(program) = ctx.resolve("detach_shader", program) else {
                return;
            };
            let Some(shader) = ctx.resolve("detach_shader", shader) else {
                return;
            };
            ctx.driver().detach_shader(program, shader);
        })
    }

    /// Replace a shader's source. The string is copied into the work item.
    pub fn shader_source(&self, shader: ObjectHandle, source: &str) -> Result<(), RelayError> {
        let source = source.to_owned();
        self.queue.enqueue("shader_source", move |ctx| {
            let Some(name) = ctx.resolve("shader_source", shader) else {
                return;
            };
            ctx.driver().shader_source(name, &source);
        })
    }

    pub fn compile_shader(&self, shader: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("compile_shader", move |ctx| {
            let Some(name) = ctx.resolve("compile_shader", shader) else {
                return;
            };
            ctx.driver().compile_shader(name);
        })
    }

    pub fn link_program(&self, program: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("link_program", move |ctx| {
            let Some(name) = ctx.resolve("link_program", program) else {
                return;
            };
            ctx.driver().link_program(name);
        })
    }

    /// Install a program. Handle 0 uninstalls the current program.
    pub fn use_program(&self, program: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("use_program", move |ctx| {
            let Some(name) = ctx.resolve("use_program", program) else {
                return;
            };
            ctx.driver().use_program(name);
        })
    }

    pub fn validate_program(&self, program: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("validate_program", move |ctx| {
            let Some(name) = ctx.resolve("validate_program", program) else {
                return;
            };
            ctx.driver().validate_program(name);
        })
    }

    pub fn bind_attrib_location(
        &self,
        program: ObjectHandle,
        index: u32,
        name: &str,
    ) -> Result<(), RelayError> {
        let attrib = name.to_owned();
        self.queue.enqueue("bind_attrib_location", move |ctx| {
            let Some(program) = ctx.resolve("bind_attrib_location", program) else {
                return;
            };
            ctx.driver().bind_attrib_location(program, index, &attrib);
        })
    }

    pub fn get_shader_parameter(
        &self,
        shader: ObjectHandle,
        pname: GlEnum,
    ) -> Result<i32, RelayError> {
        let result = self
            .queue
            .enqueue_blocking("get_shader_parameter", move |ctx| {
                let name = ctx.lookup(shader)?;
                Ok::<_, RegistryError>(ctx.driver().get_shader_parameter(name, pname))
            })?;
        Ok(result?)
    }

    pub fn get_program_parameter(
        &self,
        program: ObjectHandle,
        pname: GlEnum,
    ) -> Result<i32, RelayError> {
        let result = self
            .queue
            .enqueue_blocking("get_program_parameter", move |ctx| {
                let name = ctx.lookup(program)?;
                Ok::<_, RegistryError>(ctx.driver().get_program_parameter(name, pname))
            })?;
        Ok(result?)
    }

    pub fn get_shader_info_log(&self, shader: ObjectHandle) -> Result<String, RelayError> {
        let result = self
            .queue
            .enqueue_blocking("get_shader_info_log", move |ctx| {
                let name = ctx.lookup(shader)?;
                Ok::<_, RegistryError>(ctx.driver().get_shader_info_log(name))
            })?;
        Ok(result?)
    }

    pub fn get_program_info_log(&self, program: ObjectHandle) -> Result<String, RelayError> {
        let result = self
            .queue
            .enqueue_blocking("get_program_info_log", move |ctx| {
                let name = ctx.lookup(program)?;
                Ok::<_, RegistryError>(ctx.driver().get_program_info_log(name))
            })?;
        Ok(result?)
    }

    /// Shaders attached to `program`, as caller-visible handles.
    ///
    /// The driver answers in native names; each is translated back through
    /// the registry's reverse lookup. A name with no handle means the
    /// registry and driver have diverged, which is an internal-consistency
    /// fault.
    pub fn get_attached_shaders(
        &self,
        program: ObjectHandle,
    ) -> Result<Vec<ObjectHandle>, RelayError> {
        let result = self
            .queue
            .enqueue_blocking("get_attached_shaders", move |ctx| {
                let name = ctx.lookup(program)?;
                let names = ctx.driver().get_attached_shaders(name);
                let registry = ctx.registry();
                names
                    .into_iter()
                    .map(|shader| {
                        registry
                            .reverse_lookup(shader)
                            .ok_or(RegistryError::UnmappedName(shader))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })?;
        Ok(result?)
    }

    pub fn get_uniform_location(
        &self,
        program: ObjectHandle,
        name: &str,
    ) -> Result<i32, RelayError> {
        let uniform = name.to_owned();
        let result = self
            .queue
            .enqueue_blocking("get_uniform_location", move |ctx| {
                let name = ctx.lookup(program)?;
                Ok::<_, RegistryError>(ctx.driver().get_uniform_location(name, &uniform))
            })?;
        Ok(result?)
    }

    pub fn get_attrib_location(
        &self,
        program: ObjectHandle,
        name: &str,
    ) -> Result<i32, RelayError> {
        let attrib = name.to_owned();
        let result = self
            .queue
            .enqueue_blocking("get_attrib_location", move |ctx| {
                let name = ctx.lookup(program)?;
                Ok::<_, RegistryError>(ctx.driver().get_attrib_location(name, &attrib))
            })?;
        Ok(result?)
    }
}
