use shared::catalog::library::RESOURCES;
use shared::format::format_count;
use shared::ContentUnit;
use yew::prelude::*;

#[function_component(ResourcesView)]
pub fn resources_view() -> Html {
    html! {
        <div class="view resources-view">
            <div class="view-header">
                <div>
                    <h1>{ ContentUnit::Resources.title() }</h1>
                    <p class="muted">{ "Templates, checklists and worksheets to put lessons into practice" }</p>
                </div>
            </div>
            <table class="card resource-table">
                <thead>
                    <tr>
                        <th>{ "Title" }</th>
                        <th>{ "Type" }</th>
                        <th>{ "Size" }</th>
                        <th>{ "Downloads" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for RESOURCES.iter().map(|resource| html! {
                        <tr>
                            <td class="strong">{ resource.title }</td>
                            <td><span class="badge badge-outline">{ resource.kind }</span></td>
                            <td class="muted">{ resource.size }</td>
                            <td>{ format_count(resource.downloads) }</td>
                            <td><button class="button button-small button-outline">{ "Download" }</button></td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
