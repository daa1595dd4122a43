use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::team::list_teams,
        api::team::get_team,
        api::team::create_team,
        api::team::update_team,
        api::team::delete_team,
        api::driver::list_drivers,
        api::driver::get_driver,
        api::driver::create_driver,
        api::driver::update_driver,
        api::driver::delete_driver,
    ),
    components(
        schemas(
            api::team::TeamDto,
            api::driver::DriverDto,
        )
    ),
    tags(
        (name = "paddock", description = "Paddock API"),
        (name = "team", description = "Team resources"),
        (name = "driver", description = "Driver resources")
    )
)]
pub struct ApiDoc;
