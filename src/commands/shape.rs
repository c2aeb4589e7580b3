use anyhow::Result;
use hello_shapes::ShapeRequest;
use tracing::debug;

use super::{step_exit_code, Context};

pub fn execute(ctx: &Context, request: ShapeRequest) -> Result<i32> {
    debug!(?request, max = ctx.config.shape.max_dimension, "shape requested");
    let mut session = ctx.session();
    let result = session.draw_dynamic_shape(request);
    step_exit_code(&mut session, "shape", result)
}
