/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use common::consts::{COLOR_DEPTH_FIELDS, SCREEN_SIZE_FIELDS};
use common::database::*;
use common::input::{check_factory_name, parse_lookups};
use common::types::*;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeFactoryRequest {
    pub name: String,
    pub admin: i32,
    pub architecture: i32,
    pub operating_system: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeScreenSizeRequest {
    pub width: i32,
    pub height: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeColorDepthRequest {
    pub bits_per_pixel: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FactoryResponse {
    #[serde(flatten)]
    pub factory: MFactory,
    pub screen_sizes: Vec<MScreenSize>,
    pub color_depths: Vec<MColorDepth>,
}

pub(crate) async fn factory_by_name(state: &ServerState, name: &str) -> WebResult<MFactory> {
    get_factory_by_name(&state.db, name)
        .await?
        .ok_or_else(|| WebError::not_found("Factory"))
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<ListResponse>>> {
    let factories: ListResponse = list_factories(&state.db)
        .await?
        .into_iter()
        .map(|f| ListItem {
            id: f.id,
            name: f.name,
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: factories,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeFactoryRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<String>>)> {
    let Json(body) = body?;

    if let Err(e) = check_factory_name(&body.name) {
        return Err(WebError::invalid_name("Factory Name", e));
    }

    if get_factory_by_name(&state.db, &body.name).await?.is_some() {
        return Err(WebError::already_exists("Factory Name"));
    }

    if EUser::find_by_id(body.admin).one(&state.db).await?.is_none() {
        return Err(WebError::not_found("Admin"));
    }

    if EArchitecture::find_by_id(body.architecture)
        .one(&state.db)
        .await?
        .is_none()
    {
        return Err(WebError::not_found("Architecture"));
    }

    if EOperatingSystem::find_by_id(body.operating_system)
        .one(&state.db)
        .await?
        .is_none()
    {
        return Err(WebError::not_found("Operating System"));
    }

    let factory = create_factory(
        &state.db,
        &body.name,
        body.admin,
        body.architecture,
        body.operating_system,
    )
    .await?;

    let res = BaseResponse {
        error: false,
        message: factory.id.to_string(),
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_factory(
    state: State<Arc<ServerState>>,
    Path(factory): Path<String>,
) -> WebResult<Json<BaseResponse<FactoryResponse>>> {
    let factory = factory_by_name(&state, &factory).await?;
    let screen_sizes = screen_sizes(&state.db, factory.id, &[]).await?;
    let color_depths = color_depths(&state.db, factory.id, &[]).await?;

    let res = BaseResponse {
        error: false,
        message: FactoryResponse {
            factory,
            screen_sizes,
            color_depths,
        },
    };

    Ok(Json(res))
}

pub async fn delete_factory(
    state: State<Arc<ServerState>>,
    Path(factory): Path<String>,
) -> WebResult<Json<BaseResponse<String>>> {
    let factory = factory_by_name(&state, &factory).await?;
    common::database::delete_factory(&state.db, factory).await?;

    let res = BaseResponse {
        error: false,
        message: "Factory deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_screen_sizes(
    state: State<Arc<ServerState>>,
    Path(factory): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> WebResult<Json<BaseResponse<Vec<MScreenSize>>>> {
    let lookups = parse_lookups(&params, &SCREEN_SIZE_FIELDS)?;
    let factory = factory_by_name(&state, &factory).await?;

    let res = BaseResponse {
        error: false,
        message: screen_sizes(&state.db, factory.id, &lookups).await?,
    };

    Ok(Json(res))
}

pub async fn post_screen_sizes(
    state: State<Arc<ServerState>>,
    Path(factory): Path<String>,
    body: Result<Json<MakeScreenSizeRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<String>>)> {
    let Json(body) = body?;

    if body.width <= 0 || body.height <= 0 {
        return Err(WebError::BadRequest(format!(
            "Invalid screen size {}x{}",
            body.width, body.height
        )));
    }

    let factory = factory_by_name(&state, &factory).await?;
    let screen_size = create_screen_size(&state.db, factory.id, body.width, body.height).await?;

    let res = BaseResponse {
        error: false,
        message: screen_size.id.to_string(),
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_color_depths(
    state: State<Arc<ServerState>>,
    Path(factory): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> WebResult<Json<BaseResponse<Vec<MColorDepth>>>> {
    let lookups = parse_lookups(&params, &COLOR_DEPTH_FIELDS)?;
    let factory = factory_by_name(&state, &factory).await?;

    let res = BaseResponse {
        error: false,
        message: color_depths(&state.db, factory.id, &lookups).await?,
    };

    Ok(Json(res))
}

pub async fn post_color_depths(
    state: State<Arc<ServerState>>,
    Path(factory): Path<String>,
    body: Result<Json<MakeColorDepthRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<String>>)> {
    let Json(body) = body?;

    if body.bits_per_pixel <= 0 {
        return Err(WebError::BadRequest(format!(
            "Invalid color depth {}",
            body.bits_per_pixel
        )));
    }

    let factory = factory_by_name(&state, &factory).await?;
    let color_depth = create_color_depth(&state.db, factory.id, body.bits_per_pixel).await?;

    let res = BaseResponse {
        error: false,
        message: color_depth.id.to_string(),
    };

    Ok((StatusCode::CREATED, Json(res)))
}
