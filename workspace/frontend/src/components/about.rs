use yew::prelude::*;

use crate::settings::get_settings;

#[function_component(About)]
pub fn about() -> Html {
    let settings = get_settings();
    let seed = match settings.seed {
        Some(seed) => seed.to_string(),
        None => "acak setiap kali dimuat".to_string(),
    };

    html! {
        <div class="card bg-base-100 shadow max-w-3xl">
            <div class="card-body gap-4">
                <h2 class="card-title">{"Tentang dashboard ini"}</h2>
                <p>
                    {"Semua angka dibangkitkan di browser: curah hujan harian sintetis dengan pola musiman, \
                      ditambah tiga estimasi model (regresi linear, random forest, dan ensemble berbobot). \
                      Tidak ada model yang dilatih dan tidak ada data yang dikirim ke server."}
                </p>
                <div class="stats stats-vertical md:stats-horizontal shadow">
                    <div class="stat">
                        <div class="stat-title">{"Jumlah hari"}</div>
                        <div class="stat-value text-lg">{settings.days}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Seed"}</div>
                        <div class="stat-value text-lg">{seed}</div>
                        <div class="stat-desc">{"localStorage: raincast_seed"}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Label tanggal"}</div>
                        <div class="stat-value text-lg">{settings.locale.code()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
