//! Build, execute, parse and translate against the live mock upstream.
//!
//! # Design
//! Starts the mock upstream on a random port, then drives every core client
//! operation over real HTTP using ureq, following the type URLs the upstream
//! hands back exactly as the server does.

use pokedex_core::{translate, HttpRequest, HttpResponse, PokeApiClient, PokemonId, UpstreamError, SPANISH};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data, letting the core interpret the status.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = agent.get(&req.url);
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }
    let mut response = builder.call().expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    HttpResponse::new(status, body)
}

fn start_upstream() -> PokeApiClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_upstream::run(listener).await
        })
        .unwrap();
    });

    PokeApiClient::new(&format!("http://{addr}"))
}

#[test]
fn full_translation_flow() {
    let client = start_upstream();

    // Step 1: list, mapped to summaries in upstream order.
    let page = client.parse_list_pokemon(execute(client.build_list_pokemon())).unwrap();
    let list = translate::summarize(page);
    assert_eq!(list.results.len(), 7);
    assert_eq!(list.results[0].name, "bulbasaur");
    assert_eq!(list.results[6].name, "missingno");

    // Step 2: detail keeps slot order.
    let pokemon = client
        .parse_get_pokemon(execute(client.build_get_pokemon(PokemonId::new(1))))
        .unwrap();
    let detail = translate::detail(pokemon.clone());
    let slots: Vec<_> = detail.types.iter().map(|t| (t.slot, t.kind.name.as_str())).collect();
    assert_eq!(slots, [(1, "grass"), (2, "poison")]);

    // Step 3: follow each type URL and keep only Spanish names.
    let translated: Vec<_> = pokemon
        .types
        .into_iter()
        .map(|slot| {
            let resource = client
                .parse_get_type(execute(client.build_get_type(&slot.kind.url)))
                .unwrap();
            translate::translate_slot(slot, resource, SPANISH)
        })
        .collect();
    let dto = translate::pokemon_and_types(detail.name, translated);
    assert_eq!(dto.types[0].kind.names[0].name, "Planta");
    assert_eq!(dto.types[1].kind.names[0].name, "Veneno");
    assert!(dto
        .types
        .iter()
        .all(|t| t.kind.names.iter().all(|n| n.language.name == "es")));

    // Step 4: unknown id is NotFound.
    let err = client
        .parse_get_pokemon(execute(client.build_get_pokemon(PokemonId::UNKNOWN)))
        .unwrap_err();
    assert!(matches!(err, UpstreamError::NotFound));

    // Step 5: a type without a Spanish name yields an empty list.
    let missingno = client
        .parse_get_pokemon(execute(client.build_get_pokemon(PokemonId::new(9999))))
        .unwrap();
    let shadow_slot = missingno.types[1].clone();
    let shadow = client
        .parse_get_type(execute(client.build_get_type(&shadow_slot.kind.url)))
        .unwrap();
    assert!(translate::translate_slot(shadow_slot, shadow, SPANISH).kind.names.is_empty());
}
