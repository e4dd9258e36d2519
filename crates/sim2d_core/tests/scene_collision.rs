//! Integration tests exercising collision queries through scenes and
//! entities, the way a simulation driver would use them.

use sim2d_core::{
    entities_intersect, BoxCollider, CircleCollider, Collider, Entity, Scene, Transform, Vec2,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn entity_with_box(name: &str, position: Vec2, size: Vec2) -> Entity {
    init_logging();
    let mut entity = Entity::new(name);
    entity.add_component(Transform::from_position(position));
    entity.add_component(BoxCollider::new(size, Vec2::ZERO));
    entity
}

fn entity_with_circle(name: &str, position: Vec2, radius: f32) -> Entity {
    init_logging();
    let mut entity = Entity::new(name);
    entity.add_component(Transform::from_position(position));
    entity.add_component(CircleCollider::new(radius, Vec2::ZERO));
    entity
}

#[test]
fn test_box_circle_through_entities() {
    // 10x10 box at the origin; circle radius 3. At x=8 the closest box
    // point (5, 0) is exactly radius away; at x=9 it is not.
    let wall = entity_with_box("wall", Vec2::ZERO, Vec2::new(10.0, 10.0));
    let touching = entity_with_circle("touching", Vec2::new(8.0, 0.0), 3.0);
    let separated = entity_with_circle("separated", Vec2::new(9.0, 0.0), 3.0);

    assert!(entities_intersect(&wall, &touching));
    assert!(entities_intersect(&touching, &wall));
    assert!(!entities_intersect(&wall, &separated));
}

#[test]
fn test_circle_circle_through_entities() {
    let a = entity_with_circle("a", Vec2::ZERO, 2.0);
    let apart = entity_with_circle("apart", Vec2::new(5.0, 0.0), 2.0);
    let overlapping = entity_with_circle("overlapping", Vec2::new(3.9, 0.0), 2.0);
    let touching = entity_with_circle("touching", Vec2::new(4.0, 0.0), 2.0);

    assert!(!entities_intersect(&a, &apart));
    assert!(entities_intersect(&a, &overlapping));
    assert!(entities_intersect(&a, &touching));
}

#[test]
fn test_box_box_symmetry() {
    let a = entity_with_box("a", Vec2::ZERO, Vec2::new(4.0, 4.0));
    let b = entity_with_box("b", Vec2::new(3.0, 0.0), Vec2::new(4.0, 4.0));
    let far = entity_with_box("far", Vec2::new(100.0, 0.0), Vec2::new(4.0, 4.0));

    assert_eq!(entities_intersect(&a, &b), entities_intersect(&b, &a));
    assert!(entities_intersect(&a, &b));
    assert!(!entities_intersect(&a, &far));
}

#[test]
fn test_contains_point_through_collider() {
    let entity = entity_with_box("zone", Vec2::new(10.0, 10.0), Vec2::new(4.0, 4.0));
    let collider = entity.get_component::<BoxCollider>().unwrap();
    let transform = entity.transform().unwrap();

    assert!(collider.contains_point(transform, Vec2::new(11.0, 11.0)));
    // Edge at x = 12 is inclusive
    assert!(collider.contains_point(transform, Vec2::new(12.0, 10.0)));
    assert!(!collider.contains_point(transform, Vec2::new(12.5, 10.0)));
}

#[test]
fn test_queries_track_live_transform() {
    // The collider holds no transform snapshot: moving the entity after
    // attaching the collider changes every subsequent query result.
    let a = entity_with_circle("a", Vec2::ZERO, 1.0);
    let mut b = entity_with_circle("b", Vec2::new(10.0, 0.0), 1.0);
    assert!(!entities_intersect(&a, &b));

    b.transform_mut().unwrap().set_position(Vec2::new(1.5, 0.0));
    assert!(entities_intersect(&a, &b));
}

#[test]
fn test_entity_without_transform_intersects_nothing() {
    let mut bare = Entity::new("bare");
    bare.add_component(CircleCollider::new(5.0, Vec2::ZERO));
    bare.remove_component::<Transform>();

    let other = entity_with_circle("other", Vec2::ZERO, 5.0);
    assert!(!entities_intersect(&bare, &other));
    assert!(!entities_intersect(&other, &bare));
}

#[test]
fn test_entity_without_collider_intersects_nothing() {
    let mut ghost = Entity::new("ghost");
    ghost.add_component(Transform::default());
    let solid = entity_with_box("solid", Vec2::ZERO, Vec2::new(100.0, 100.0));
    assert!(!entities_intersect(&ghost, &solid));
}

#[test]
fn test_scale_feeds_collision() {
    let mut a = entity_with_circle("a", Vec2::ZERO, 2.0);
    let b = entity_with_circle("b", Vec2::new(7.0, 0.0), 2.0);
    assert!(!entities_intersect(&a, &b));

    // Radius scales by the larger factor: 2 * 3 + 2 = 8 >= 7
    a.transform_mut().unwrap().set_scale(Vec2::new(1.0, 3.0));
    assert!(entities_intersect(&a, &b));
}

#[test]
fn test_scene_pairwise_sweep() {
    let mut scene = Scene::new("sweep");
    scene.add_entity(entity_with_circle("a", Vec2::ZERO, 1.0));
    scene.add_entity(entity_with_circle("b", Vec2::new(1.5, 0.0), 1.0));
    scene.add_entity(entity_with_circle("c", Vec2::new(10.0, 0.0), 1.0));

    let entities: Vec<_> = scene.iter().collect();
    let mut hits = Vec::new();
    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            if entities_intersect(entities[i], entities[j]) {
                hits.push((entities[i].name().to_owned(), entities[j].name().to_owned()));
            }
        }
    }
    assert_eq!(hits, vec![("a".to_owned(), "b".to_owned())]);
}

#[test]
fn test_scene_collider_query_scoping() {
    let mut scene = Scene::new("query");
    scene.add_entity(entity_with_box("crate", Vec2::ZERO, Vec2::ONE));
    scene.add_entity(entity_with_circle("ball", Vec2::ZERO, 1.0));
    scene.create_entity("marker");

    // Queries match the concrete component type only
    assert_eq!(scene.find_with_component::<BoxCollider>().len(), 1);
    assert_eq!(scene.find_with_component::<CircleCollider>().len(), 1);
    assert_eq!(scene.find_with_component::<Transform>().len(), 2);
}

#[test]
fn test_attach_collider_without_transform_auto_creates_one() {
    let mut scene = Scene::new("auto");
    let id = scene.create_entity("dropped-in");
    scene
        .get_mut(id)
        .unwrap()
        .add_component(BoxCollider::new(Vec2::new(2.0, 2.0), Vec2::ZERO));

    // The entity got a default Transform and is immediately queryable
    let entity = scene.get(id).unwrap();
    assert!(entity.has_component::<Transform>());
    let other = entity_with_box("origin", Vec2::ZERO, Vec2::new(2.0, 2.0));
    assert!(entities_intersect(entity, &other));
}

#[test]
fn test_remove_entity_mid_simulation() {
    let mut scene = Scene::new("churn");
    let a = scene.add_entity(entity_with_circle("a", Vec2::ZERO, 1.0));
    let b = scene.add_entity(entity_with_circle("b", Vec2::new(0.5, 0.0), 1.0));

    scene.update(0.016);
    assert!(scene.remove_entity(a));
    scene.update(0.016);

    assert_eq!(scene.entity_count(), 1);
    assert_eq!(scene.iter().next().unwrap().id(), b);
}

#[test]
fn test_negative_size_box_entity_yields_result() {
    // Degenerate geometry must produce an answer, not a panic
    let inverted = entity_with_box("inverted", Vec2::ZERO, Vec2::new(-2.0, 2.0));
    let ball = entity_with_circle("ball", Vec2::new(5.0, 0.0), 1.0);
    assert!(!entities_intersect(&inverted, &ball));
    assert!(!entities_intersect(&ball, &inverted));
}

#[test]
fn test_offset_collider_shifts_queries() {
    let mut sensor = Entity::new("sensor");
    sensor.add_component(Transform::from_position(Vec2::new(5.0, 0.0)));
    // Circle sits 3 units ahead of the entity, so its center is at (8, 0)
    sensor.add_component(CircleCollider::new(1.0, Vec2::new(3.0, 0.0)));

    let target = entity_with_box("target", Vec2::new(10.0, 0.0), Vec2::new(2.0, 2.0));
    assert!(entities_intersect(&sensor, &target));

    let behind = entity_with_box("behind", Vec2::new(5.0, 0.0), Vec2::new(2.0, 2.0));
    assert!(!entities_intersect(&sensor, &behind));
}
