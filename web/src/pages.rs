/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::endpoints::factories::factory_by_name;
use crate::error::WebResult;
use axum::extract::{Path, State};
use axum::response::Html;
use common::database::{color_depths, screen_sizes};
use common::templatetags::sql_queries;
use common::types::*;
use std::sync::Arc;

pub async fn get_factory(
    state: State<Arc<ServerState>>,
    Path(factory): Path<String>,
) -> WebResult<Html<String>> {
    let factory = factory_by_name(&state, &factory).await?;
    let sizes = screen_sizes(&state.db, factory.id, &[]).await?;
    let depths = color_depths(&state.db, factory.id, &[]).await?;

    let size_items = sizes
        .iter()
        .map(|s| format!("<li>{}x{}</li>", s.width, s.height))
        .collect::<Vec<String>>()
        .join("\n");

    let depth_items = depths
        .iter()
        .map(|d| format!("<li>{} bpp</li>", d.bits_per_pixel))
        .collect::<Vec<String>>()
        .join("\n");

    // factory names are restricted to [a-z0-9-] and need no escaping
    let mut page = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{name}</title></head>
<body>
<h1>{name}</h1>
<h2>Screen sizes</h2>
<ul>
{size_items}
</ul>
<h2>Color depths</h2>
<ul>
{depth_items}
</ul>
"#,
        name = factory.name,
        size_items = size_items,
        depth_items = depth_items,
    );

    if state.cli.debug {
        page.push_str(&sql_queries());
        page.push('\n');
    }

    page.push_str("</body>\n</html>\n");

    Ok(Html(page))
}
