use crate::components::ProgressBar;
use shared::catalog::library::{Course, COURSES, COURSE_CATEGORIES};
use shared::ContentUnit;
use yew::prelude::*;

#[function_component(CoursesView)]
pub fn courses_view() -> Html {
    let completed = COURSES.iter().filter(|c| c.progress == 100).count();

    html! {
        <div class="view courses-view">
            <div class="view-header">
                <div>
                    <h1>{ ContentUnit::Courses.title() }</h1>
                    <p class="muted">
                        { format!("{} of {} courses completed", completed, COURSES.len()) }
                    </p>
                </div>
            </div>

            <div class="badge-row">
                { for COURSE_CATEGORIES.iter().enumerate().map(|(i, name)| html! {
                    <span class={classes!("badge", if i == 0 { "badge-solid" } else { "badge-outline" })}>
                        { *name }
                    </span>
                }) }
            </div>

            <div class="card-grid">
                { for COURSES.iter().map(course_card) }
            </div>
        </div>
    }
}

fn course_card(course: &Course) -> Html {
    html! {
        <div class="card course-card">
            <div class="card-header">
                <span class="badge badge-outline">{ course.category }</span>
                <span class="badge badge-secondary">{ course.status() }</span>
            </div>
            <h3>{ course.title }</h3>
            <p class="muted">
                { format!("{} · {} lessons · {}", course.instructor, course.lessons, course.duration) }
            </p>
            <ProgressBar percent={f32::from(course.progress)} />
            <div class="card-footer">
                <span class="muted">{ format!("{}% complete", course.progress) }</span>
                <button class="button button-small">
                    { if course.progress == 0 { "Start" } else if course.progress == 100 { "Review" } else { "Continue" } }
                </button>
            </div>
        </div>
    }
}
