use crate::args::{PickArgs, RankArgs, RenderArgs};
use crate::context::KeyrankCliContext;
use crate::output::{format_info, print_picks, print_ranking};
use crate::utils::{LoadSummary, load_observations, read_observations};
use tracing::info;

fn load(ctx: &mut KeyrankCliContext, input: &str, output_format: &str) -> keyrank::Result<()> {
    let observations = read_observations(input)?;
    let LoadSummary {
        inserted,
        replaced,
        ignored,
    } = load_observations(&mut ctx.registry, &observations);

    info!(input, inserted, replaced, ignored, "observations loaded");
    if output_format != "json" && ignored > 0 {
        eprintln!(
            "{}",
            format_info(&format!(
                "{} duplicate observation(s) ignored; set \"overwrite\": true to replace",
                ignored
            ))
        );
    }
    Ok(())
}

pub fn handle_pick_command(
    args: PickArgs,
    ctx: &mut KeyrankCliContext,
    output_format: &str,
) -> keyrank::Result<()> {
    load(ctx, &args.input, output_format)?;

    let inflection_point = ctx.inflection_point(args.inflection);
    let picks = ctx.registry.extract_top(args.count, inflection_point)?;

    print_picks(&picks, output_format);
    Ok(())
}

pub fn handle_rank_command(
    args: RankArgs,
    ctx: &mut KeyrankCliContext,
    output_format: &str,
) -> keyrank::Result<()> {
    load(ctx, &args.input, output_format)?;

    let inflection_point = ctx.inflection_point(args.inflection);
    let ranking = ctx.registry.ranking(inflection_point)?;

    print_ranking(&ranking, output_format);
    Ok(())
}

pub fn handle_render_command(
    args: RenderArgs,
    ctx: &mut KeyrankCliContext,
    output_format: &str,
) -> keyrank::Result<()> {
    load(ctx, &args.input, output_format)?;

    if output_format == "json" {
        let entries: Vec<_> = ctx.registry.entries().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
        );
    } else {
        print!("{}", ctx.registry.render());
    }
    Ok(())
}
