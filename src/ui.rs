pub fn render_index(challenge_name: &str) -> String {
    INDEX_HTML.replace("{{CHALLENGE_NAME}}", &escape_html(challenge_name))
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Streak Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #171a24;
      --bg-2: #232a3d;
      --ink: #e8e9ef;
      --muted: #9aa1b5;
      --accent: #34d399;
      --accent-2: #818cf8;
      --danger: #f87171;
      --card: rgba(34, 39, 56, 0.82);
      --cell: #2a3044;
      --shadow: 0 24px 60px rgba(8, 10, 18, 0.5);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #1b2030 60%, #161923 100%);
      color: var(--ink);
      font-family: 'Space Grotesk', 'Trebuchet MS', sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: 'Fraunces', 'Georgia', serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .challenge-input {
      background: transparent;
      border: none;
      border-bottom: 1px dashed rgba(154, 161, 181, 0.4);
      color: var(--ink);
      font-family: inherit;
      font-size: 1.05rem;
      padding: 4px 2px;
      width: min(340px, 100%);
    }

    .challenge-input:focus {
      outline: none;
      border-bottom-color: var(--accent);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--cell);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(129, 140, 248, 0.12);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.streak {
      color: var(--accent);
    }

    .progress-track {
      background: var(--cell);
      border-radius: 999px;
      height: 16px;
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent-2), var(--accent));
      transition: width 400ms ease;
    }

    .progress-caption {
      font-size: 0.85rem;
      color: var(--muted);
      margin-top: 6px;
    }

    section h2 {
      margin: 0 0 12px;
      font-size: 1.25rem;
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(44px, 1fr));
      gap: 6px;
    }

    .day-cell {
      position: relative;
      background: var(--cell);
      border-radius: 10px;
      padding: 10px 0 14px;
      text-align: center;
      font-size: 0.85rem;
      cursor: pointer;
      border: 1px solid transparent;
      user-select: none;
    }

    .day-cell.checked {
      background: rgba(52, 211, 153, 0.2);
      border-color: rgba(52, 211, 153, 0.5);
    }

    .day-cell.inactive {
      opacity: 0.35;
      cursor: default;
    }

    .day-cell.current-day {
      border-color: var(--accent-2);
      box-shadow: 0 0 0 2px rgba(129, 140, 248, 0.35);
    }

    .day-cell.range-anchor {
      border-color: var(--accent);
      box-shadow: 0 0 0 2px rgba(52, 211, 153, 0.45);
    }

    .mood-dot {
      position: absolute;
      bottom: 5px;
      left: 50%;
      transform: translateX(-50%);
      width: 6px;
      height: 6px;
      border-radius: 999px;
      background: var(--accent);
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease;
      color: var(--ink);
      background: var(--cell);
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: #10231c;
    }

    .btn-danger {
      background: var(--danger);
      color: #2b1210;
    }

    .btn-toggled {
      outline: 2px solid var(--accent);
    }

    .timeline {
      display: grid;
      gap: 10px;
    }

    .timeline-item {
      display: flex;
      gap: 12px;
      align-items: baseline;
      background: var(--cell);
      border-radius: 14px;
      padding: 12px 16px;
    }

    .timeline-date {
      font-weight: 600;
      white-space: nowrap;
    }

    .timeline-note {
      color: var(--muted);
      font-size: 0.92rem;
    }

    .badge-shelf {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 12px;
    }

    .badge-item {
      background: var(--cell);
      border-radius: 14px;
      padding: 14px;
      text-align: center;
      opacity: 0.45;
      display: grid;
      gap: 6px;
    }

    .badge-item.unlocked {
      opacity: 1;
      border: 1px solid rgba(52, 211, 153, 0.5);
    }

    .badge-label {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .badge-item.unlocked .badge-label {
      color: var(--accent);
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: var(--danger);
    }

    .status[data-type='ok'] {
      color: var(--accent);
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(8, 10, 18, 0.7);
      display: none;
      place-items: center;
      z-index: 10;
    }

    .modal {
      width: min(420px, 92vw);
      background: var(--bg-2);
      border-radius: 20px;
      padding: 26px;
      display: grid;
      gap: 14px;
    }

    .modal textarea {
      background: var(--cell);
      color: var(--ink);
      border: 1px solid rgba(129, 140, 248, 0.2);
      border-radius: 10px;
      font-family: inherit;
      padding: 10px;
      min-height: 70px;
      resize: vertical;
    }

    .mood-selector {
      display: flex;
      gap: 10px;
      justify-content: center;
      font-size: 1.6rem;
    }

    .mood-selector span {
      cursor: pointer;
      filter: grayscale(1);
      transition: transform 120ms ease;
    }

    .mood-selector span.selected {
      filter: none;
      transform: scale(1.2);
    }

    .modal-actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    .confetti-container {
      position: fixed;
      inset: 0;
      pointer-events: none;
      overflow: hidden;
      z-index: 20;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes confetti-fall {
      0% { transform: translateY(0) rotate(0deg); opacity: 1; }
      100% { transform: translateY(105vh) rotate(720deg); opacity: 0; }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Streak Tracker</h1>
      <input id="challenge-name" class="challenge-input" value="{{CHALLENGE_NAME}}" maxlength="60" />
      <p class="subtitle">Log each day, keep the chain unbroken, earn the badges.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="current-streak" class="value streak">0</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span id="longest-streak" class="value">0</span>
      </div>
      <div class="stat">
        <span class="label">Total check-ins</span>
        <span id="total-checkins" class="value">0</span>
      </div>
      <div class="stat">
        <span class="label">Weekly average</span>
        <span id="weekly-avg" class="value">0.0</span>
      </div>
    </section>

    <section>
      <h2>90-day goal</h2>
      <div class="progress-track">
        <div id="progress-fill" class="progress-fill"></div>
      </div>
      <div id="progress-caption" class="progress-caption">0% of the way there.</div>
    </section>

    <section>
      <h2 id="calendar-title">Calendar</h2>
      <div id="calendar-grid" class="calendar-grid"></div>
    </section>

    <section class="toolbar">
      <button id="range-btn" type="button">Mark a range</button>
      <button id="fast-start-btn" type="button">Fast start</button>
      <button id="export-btn" type="button">Export</button>
      <button id="import-btn" type="button">Import</button>
      <button id="notify-btn" type="button">Reminders</button>
      <button id="reset-btn" class="btn-danger" type="button">Reset</button>
      <input id="import-file" type="file" accept="application/json" hidden />
    </section>

    <section>
      <h2>Recent check-ins</h2>
      <div id="timeline" class="timeline"></div>
    </section>

    <section>
      <h2>Badges</h2>
      <div id="badge-shelf" class="badge-shelf"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <div id="modal-backdrop" class="modal-backdrop">
    <div class="modal">
      <h2 id="modal-date">Log check-in</h2>
      <div id="mood-selector" class="mood-selector">
        <span data-mood="1">&#128553;</span>
        <span data-mood="2">&#128533;</span>
        <span data-mood="3">&#128528;</span>
        <span data-mood="4">&#128522;</span>
        <span data-mood="5">&#128513;</span>
      </div>
      <textarea id="modal-note" placeholder="Optional note for the day"></textarea>
      <div class="modal-actions">
        <button id="modal-cancel" type="button">Cancel</button>
        <button id="modal-confirm" class="btn-primary" type="button">Log it</button>
      </div>
    </div>
  </div>

  <div id="confetti-container" class="confetti-container"></div>

  <script>
    const el = (id) => document.getElementById(id);
    const statusEl = el('status');
    const calendarEl = el('calendar-grid');
    const timelineEl = el('timeline');
    const badgeShelfEl = el('badge-shelf');
    const backdropEl = el('modal-backdrop');
    const moodSelectorEl = el('mood-selector');

    const MOOD_EMOJI = ['\u{1F629}', '\u{1F615}', '\u{1F610}', '\u{1F60A}', '\u{1F601}'];
    const CALENDAR_BACK = 45;
    const CALENDAR_FORWARD = 44;

    let profile = { challenge_name: '', checkins: {}, unlocked_badges: [] };
    let stats = null;
    let rangeMode = false;
    let rangeStart = null;
    let pendingDate = null;
    let statusTimer = null;

    const pad = (n) => String(n).padStart(2, '0');
    const keyOf = (date) => `${date.getFullYear()}-${pad(date.getMonth() + 1)}-${pad(date.getDate())}`;
    const todayKey = () => keyOf(new Date());

    const setStatus = (message, type) => {
      clearTimeout(statusTimer);
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        statusTimer = setTimeout(() => setStatus('', ''), 4000);
      }
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || `Request to ${path} failed`);
      }
      return res;
    };

    const postJson = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      }).then((res) => res.json());

    const renderStats = () => {
      if (!stats) return;
      el('current-streak').textContent = stats.current_streak;
      el('longest-streak').textContent = stats.longest_streak;
      el('total-checkins').textContent = stats.total_checkins;
      el('weekly-avg').textContent = stats.weekly_avg.toFixed(1);
      const pct = Math.round(stats.progress_pct);
      const fill = el('progress-fill');
      fill.style.width = `${pct}%`;
      fill.style.background = pct >= 90
        ? 'linear-gradient(90deg, #10b981, #34d399)'
        : 'linear-gradient(90deg, var(--accent-2), var(--accent))';
      el('progress-caption').textContent = `${pct}% of the way there.`;
    };

    const renderBadges = () => {
      if (!stats) return;
      badgeShelfEl.innerHTML = '';
      stats.badges.forEach((badge) => {
        const item = document.createElement('div');
        item.className = `badge-item ${badge.unlocked ? 'unlocked' : ''}`;
        item.title = badge.unlocked
          ? `${badge.label}: achieved ${badge.threshold} check-ins`
          : `${badge.label}: requires ${badge.threshold} check-ins`;
        const name = document.createElement('div');
        name.textContent = badge.label;
        const progress = document.createElement('div');
        progress.className = 'badge-label';
        progress.textContent = badge.unlocked ? 'DONE' : badge.threshold;
        item.append(name, progress);
        badgeShelfEl.appendChild(item);
      });
    };

    const renderCalendar = () => {
      calendarEl.innerHTML = '';
      const today = new Date();
      const current = todayKey();
      const start = new Date(today);
      start.setDate(today.getDate() - CALENDAR_BACK);
      const end = new Date(today);
      end.setDate(today.getDate() + CALENDAR_FORWARD);

      el('calendar-title').textContent =
        `${start.toLocaleString('en-US', { month: 'long', year: 'numeric' })} to ` +
        `${end.toLocaleString('en-US', { month: 'long', year: 'numeric' })}`;

      for (let i = 0; i <= CALENDAR_BACK + CALENDAR_FORWARD; i += 1) {
        const dayDate = new Date(start);
        dayDate.setDate(start.getDate() + i);
        const dayKey = keyOf(dayDate);
        const record = profile.checkins[dayKey];

        const cell = document.createElement('div');
        cell.className = 'day-cell';
        cell.textContent = dayDate.getDate();
        cell.dataset.date = dayKey;
        cell.title = dayKey;

        if (record) {
          cell.classList.add('checked');
          cell.title += `\nMood: ${record.mood}\nNote: ${record.note || 'None'}`;
          const dot = document.createElement('div');
          dot.className = 'mood-dot';
          cell.appendChild(dot);
        }

        if (dayKey > current) {
          cell.classList.add('inactive');
        } else {
          cell.addEventListener('click', () => handleDayClick(dayKey));
        }

        if (dayKey === current) {
          cell.classList.add('current-day');
        }
        if (rangeStart === dayKey) {
          cell.classList.add('range-anchor');
        }

        calendarEl.appendChild(cell);
      }
    };

    const renderTimeline = () => {
      timelineEl.innerHTML = '';
      const entries = Object.values(profile.checkins)
        .sort((a, b) => b.date.localeCompare(a.date))
        .slice(0, 8);

      if (entries.length === 0) {
        const empty = document.createElement('p');
        empty.className = 'subtitle';
        empty.textContent = `No check-ins yet. Start your ${profile.challenge_name} today!`;
        timelineEl.appendChild(empty);
        return;
      }

      entries.forEach((entry) => {
        const item = document.createElement('div');
        item.className = 'timeline-item';
        const date = document.createElement('span');
        date.className = 'timeline-date';
        date.textContent = `${MOOD_EMOJI[entry.mood - 1] || MOOD_EMOJI[2]} ${entry.date}`;
        const note = document.createElement('span');
        note.className = 'timeline-note';
        note.textContent = entry.note || 'No note.';
        item.append(date, note);
        timelineEl.appendChild(item);
      });
    };

    const renderAll = () => {
      renderStats();
      renderBadges();
      renderCalendar();
      renderTimeline();
    };

    const reloadProfile = async () => {
      profile = await (await api('/api/profile')).json();
    };

    const applyMutation = async (result) => {
      stats = result.stats;
      await reloadProfile();
      renderAll();
      celebrate(result.newly_unlocked || []);
    };

    const celebrate = (newlyUnlocked) => {
      newlyUnlocked.forEach((id) => {
        const badge = stats.badges.find((b) => b.id === id);
        if (badge) {
          setStatus(`Milestone unlocked: ${badge.label}!`, 'ok');
        }
      });
      if (newlyUnlocked.length > 0) {
        launchConfetti(100);
      }
    };

    const launchConfetti = (pieces) => {
      const container = el('confetti-container');
      const colors = ['#34d399', '#818cf8', '#f472b6'];
      for (let i = 0; i < pieces; i += 1) {
        const piece = document.createElement('div');
        const size = Math.random() * 10 + 5;
        piece.style.position = 'absolute';
        piece.style.width = `${size}px`;
        piece.style.height = `${size}px`;
        piece.style.left = `${Math.random() * 100}vw`;
        piece.style.top = `${-20 - Math.random() * 50}px`;
        piece.style.background = colors[Math.floor(Math.random() * colors.length)];
        piece.style.borderRadius = '2px';
        piece.style.animation = `confetti-fall ${Math.random() * 3 + 2}s linear forwards`;
        container.appendChild(piece);
        setTimeout(() => piece.remove(), 5200);
      }
    };

    const handleDayClick = (dayKey) => {
      if (rangeMode) {
        handleRangeClick(dayKey);
        return;
      }
      if (profile.checkins[dayKey]) {
        postJson('/api/checkin/remove', { date: dayKey })
          .then((result) => applyMutation(result).then(() => setStatus('Check-in removed.', '')))
          .catch((err) => setStatus(err.message, 'error'));
      } else {
        openModal(dayKey);
      }
    };

    const handleRangeClick = (dayKey) => {
      if (!rangeStart) {
        rangeStart = dayKey;
        renderCalendar();
        setStatus('Range started. Click the other end of the span.', '');
        return;
      }
      const note = window.prompt('Optional note for this bulk check-in:') || '';
      const body = { start: rangeStart, end: dayKey, note };
      rangeStart = null;
      setRangeMode(false);
      postJson('/api/range', body)
        .then((result) => applyMutation(result).then(() => {
          setStatus(result.marked > 0 ? `Marked ${result.marked} days!` : 'No days were marked.', 'ok');
        }))
        .catch((err) => setStatus(err.message, 'error'));
    };

    const setRangeMode = (on) => {
      rangeMode = on;
      rangeStart = null;
      el('range-btn').classList.toggle('btn-toggled', on);
      renderCalendar();
    };

    const openModal = (dayKey) => {
      pendingDate = dayKey;
      el('modal-date').textContent = dayKey;
      el('modal-note').value = '';
      selectMood(3);
      backdropEl.style.display = 'grid';
    };

    const closeModal = () => {
      backdropEl.style.display = 'none';
      pendingDate = null;
    };

    const selectMood = (mood) => {
      moodSelectorEl.querySelectorAll('span').forEach((span) => {
        span.classList.toggle('selected', Number(span.dataset.mood) === mood);
      });
    };

    const confirmCheckin = () => {
      if (!pendingDate) return;
      const selected = moodSelectorEl.querySelector('span.selected');
      const mood = selected ? Number(selected.dataset.mood) : 3;
      const note = el('modal-note').value.trim();
      const date = pendingDate;
      closeModal();
      postJson('/api/checkin', { date, note, mood })
        .then((result) => applyMutation(result).then(() => {
          setStatus('Daily check-in logged!', 'ok');
          if (date === todayKey()) {
            launchConfetti(50);
          }
        }))
        .catch((err) => setStatus(err.message, 'error'));
    };

    const fastStart = () => {
      const raw = window.prompt('How many consecutive days is your existing streak?');
      if (raw === null) return;
      const days = Number.parseInt(raw, 10);
      if (Number.isNaN(days) || days <= 0) {
        setStatus('Invalid number entered.', 'error');
        return;
      }
      postJson('/api/fast-start', { days })
        .then((result) => applyMutation(result).then(() =>
          setStatus(`Fast start complete. Streak set to ${days} days.`, 'ok')))
        .catch((err) => setStatus(err.message, 'error'));
    };

    const exportProfile = async () => {
      try {
        const res = await api('/api/export');
        const disposition = res.headers.get('content-disposition') || '';
        const match = disposition.match(/filename="([^"]+)"/);
        const blob = await res.blob();
        const url = URL.createObjectURL(blob);
        const link = document.createElement('a');
        link.href = url;
        link.download = match ? match[1] : 'streak_profile.json';
        document.body.appendChild(link);
        link.click();
        link.remove();
        URL.revokeObjectURL(url);
        setStatus('Profile exported.', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const importProfile = (file) => {
      const reader = new FileReader();
      reader.onload = () => {
        api('/api/import', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: reader.result
        })
          .then((res) => res.json())
          .then((result) => applyMutation(result).then(() =>
            setStatus('Profile imported and stats refreshed.', 'ok')))
          .catch((err) => setStatus(`Import failed: ${err.message}`, 'error'));
      };
      reader.readAsText(file);
    };

    const resetProfile = () => {
      if (!window.confirm('Reset ALL streak data? This cannot be undone.')) return;
      postJson('/api/reset', {})
        .then((result) => applyMutation(result).then(() =>
          setStatus('Streak data has been completely reset.', '')))
        .catch((err) => setStatus(err.message, 'error'));
    };

    const requestReminders = () => {
      if (!('Notification' in window)) {
        setStatus('This browser does not support notifications.', '');
        return;
      }
      Notification.requestPermission().then((permission) => {
        setStatus(
          permission === 'granted' ? 'Reminders enabled.' : 'Reminder permission not granted.',
          permission === 'granted' ? 'ok' : ''
        );
      });
    };

    const saveChallengeName = () => {
      postJson('/api/challenge', { name: el('challenge-name').value })
        .then((result) => {
          profile.challenge_name = result.challenge_name;
          el('challenge-name').value = result.challenge_name;
        })
        .catch((err) => setStatus(err.message, 'error'));
    };

    moodSelectorEl.addEventListener('click', (event) => {
      if (event.target.dataset.mood) {
        selectMood(Number(event.target.dataset.mood));
      }
    });
    el('modal-confirm').addEventListener('click', confirmCheckin);
    el('modal-cancel').addEventListener('click', closeModal);
    backdropEl.addEventListener('click', (event) => {
      if (event.target === backdropEl) closeModal();
    });
    el('range-btn').addEventListener('click', () => setRangeMode(!rangeMode));
    el('fast-start-btn').addEventListener('click', fastStart);
    el('export-btn').addEventListener('click', exportProfile);
    el('import-btn').addEventListener('click', () => el('import-file').click());
    el('import-file').addEventListener('change', (event) => {
      const file = event.target.files[0];
      if (file) importProfile(file);
      event.target.value = '';
    });
    el('reset-btn').addEventListener('click', resetProfile);
    el('notify-btn').addEventListener('click', requestReminders);
    el('challenge-name').addEventListener('change', saveChallengeName);

    const boot = async () => {
      const [profileRes, statsRes] = await Promise.all([api('/api/profile'), api('/api/stats')]);
      profile = await profileRes.json();
      stats = await statsRes.json();
      renderAll();
    };

    boot().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
