use anyhow::Result;

use super::{step_exit_code, Context};

pub fn execute(ctx: &Context, name: Option<String>) -> Result<i32> {
    let mut session = ctx.session();
    let result = session.greet_user(name);
    step_exit_code(&mut session, "hello", result)
}
