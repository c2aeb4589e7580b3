use anyhow::Result;

use super::Context;

pub fn execute(ctx: &Context) -> Result<i32> {
    ctx.session().simple_greet()?;
    Ok(0)
}
